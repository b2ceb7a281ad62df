//! # Primitive Shape Generation
//!
//! Quads, boxes and the faceted frustum fan. Everything else in the room is
//! composed from these three.

use cgmath::{vec3, InnerSpace, Vector3};
use std::f32::consts::TAU;

use super::{Mesh, Rgb};

/// Append a quad as two triangles: `p1 p2 p3` and `p1 p3 p4`.
///
/// Corners must be coplanar and wound counter-clockwise when seen from the
/// side `normal` points to. Winding is not checked or corrected; a reversed
/// quad simply faces inward.
pub fn add_quad(mesh: &mut Mesh, corners: [Vector3<f32>; 4], normal: Vector3<f32>, color: Rgb) {
    let [p1, p2, p3, p4] = corners;
    mesh.push_triangle([p1, p2, p3], normal, color);
    mesh.push_triangle([p1, p3, p4], normal, color);
}

/// Generate a closed box centered at the origin
///
/// Returns 36 vertices (6 faces, 2 triangles each) spanning
/// `[-width/2, width/2] x [-height/2, height/2] x [-depth/2, depth/2]`,
/// each face with its outward normal. Dimensions are not validated; zero or
/// negative sizes give a degenerate or inside-out box.
pub fn generate_box(width: f32, height: f32, depth: f32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::with_capacity(36);
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // Front face
    add_quad(
        &mut mesh,
        [vec3(-w, -h, d), vec3(w, -h, d), vec3(w, h, d), vec3(-w, h, d)],
        Vector3::unit_z(),
        color,
    );

    // Back face
    add_quad(
        &mut mesh,
        [vec3(w, -h, -d), vec3(-w, -h, -d), vec3(-w, h, -d), vec3(w, h, -d)],
        -Vector3::unit_z(),
        color,
    );

    // Left face
    add_quad(
        &mut mesh,
        [vec3(-w, -h, -d), vec3(-w, -h, d), vec3(-w, h, d), vec3(-w, h, -d)],
        -Vector3::unit_x(),
        color,
    );

    // Right face
    add_quad(
        &mut mesh,
        [vec3(w, -h, d), vec3(w, -h, -d), vec3(w, h, -d), vec3(w, h, d)],
        Vector3::unit_x(),
        color,
    );

    // Top face
    add_quad(
        &mut mesh,
        [vec3(-w, h, d), vec3(w, h, d), vec3(w, h, -d), vec3(-w, h, -d)],
        Vector3::unit_y(),
        color,
    );

    // Bottom face
    add_quad(
        &mut mesh,
        [vec3(-w, -h, -d), vec3(w, -h, -d), vec3(w, -h, d), vec3(-w, -h, d)],
        -Vector3::unit_y(),
        color,
    );

    mesh
}

/// Generate the side of a frustum as a ring of flat facets
///
/// # Arguments
/// * `top_radius` - Radius of the ring at `y = 0`
/// * `bottom_radius` - Radius of the ring at `y = -height`
/// * `height` - Vertical extent, hanging downward from the origin
/// * `segments` - Number of facets around the axis
///
/// Each facet gets one normal: the outward direction at the middle of its
/// angular span, tilted upward by 0.3 before normalizing. Shading is
/// therefore faceted, not smooth. No caps are generated.
pub fn generate_frustum_fan(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    segments: u32,
    color: Rgb,
) -> Mesh {
    let mut mesh = Mesh::with_capacity(segments as usize * 6);

    for i in 0..segments {
        let angle1 = i as f32 / segments as f32 * TAU;
        let angle2 = (i + 1) as f32 / segments as f32 * TAU;

        let top1 = vec3(angle1.cos() * top_radius, 0.0, angle1.sin() * top_radius);
        let top2 = vec3(angle2.cos() * top_radius, 0.0, angle2.sin() * top_radius);
        let bot1 = vec3(angle1.cos() * bottom_radius, -height, angle1.sin() * bottom_radius);
        let bot2 = vec3(angle2.cos() * bottom_radius, -height, angle2.sin() * bottom_radius);

        let mid = (angle1 + angle2) / 2.0;
        let normal = vec3(mid.cos(), 0.3, mid.sin()).normalize();

        add_quad(&mut mesh, [top1, top2, bot2, bot1], normal, color);
    }

    mesh
}
