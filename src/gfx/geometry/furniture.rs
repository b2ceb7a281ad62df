//! Furniture generators.
//!
//! Each piece is one compound mesh in its own local space, standing on
//! `y = 0` unless noted otherwise. Parts are boxes baked in with a local
//! offset, plus a few hand-placed quads for flat details.

use cgmath::{vec3, Vector3};

use super::{add_quad, generate_box, generate_frustum_fan, Mesh, Rgb};

/// Height of the desktop's upper surface
pub const DESK_SURFACE_HEIGHT: f32 = 0.775;

/// Desk with four legs, a drawer and a drawer handle
///
/// The 1.6 x 0.8 top is centered on the origin. Legs are 70% of `color`, the
/// drawer 90%.
pub fn generate_desk(color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.append_offset(generate_box(1.6, 0.05, 0.8, color), vec3(0.0, 0.75, 0.0));

    let leg_color = color * 0.7;
    for (x, z) in [(-0.7, -0.3), (0.7, -0.3), (-0.7, 0.3), (0.7, 0.3)] {
        mesh.append_offset(generate_box(0.05, 0.75, 0.05, leg_color), vec3(x, 0.375, z));
    }

    mesh.append_offset(generate_box(0.5, 0.2, 0.6, color * 0.9), vec3(0.45, 0.55, 0.0));
    mesh.append_offset(
        generate_box(0.15, 0.03, 0.03, vec3(0.6, 0.6, 0.6)),
        vec3(0.45, 0.55, 0.32),
    );

    mesh
}

/// Chair with a seat, a backrest on the -Z side and four dark legs
pub fn generate_chair(color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.append_offset(generate_box(0.45, 0.05, 0.45, color), vec3(0.0, 0.45, 0.0));
    mesh.append_offset(generate_box(0.45, 0.5, 0.05, color), vec3(0.0, 0.72, -0.2));

    let leg_color = vec3(0.3, 0.3, 0.3);
    for (x, z) in [(-0.18, -0.18), (0.18, -0.18), (-0.18, 0.18), (0.18, 0.18)] {
        mesh.append_offset(generate_box(0.04, 0.45, 0.04, leg_color), vec3(x, 0.225, z));
    }

    mesh
}

/// Monitor: dark bezel, lit screen quad facing +Z, neck and base
pub fn generate_monitor(frame_color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.append_offset(
        generate_box(0.6, 0.4, 0.03, vec3(0.1, 0.1, 0.1)),
        vec3(0.0, 0.35, 0.0),
    );

    add_quad(
        &mut mesh,
        [vec3(-0.27, 0.18, 0.02), vec3(0.27, 0.18, 0.02), vec3(0.27, 0.5, 0.02), vec3(-0.27, 0.5, 0.02)],
        Vector3::unit_z(),
        vec3(0.2, 0.4, 0.6),
    );

    mesh.append_offset(generate_box(0.08, 0.15, 0.08, frame_color), vec3(0.0, 0.075, 0.0));
    mesh.append_offset(generate_box(0.25, 0.02, 0.15, frame_color), vec3(0.0, 0.01, 0.0));

    mesh
}

/// Rows of keys on the keyboard
pub const KEY_ROWS: u32 = 4;
/// Keys per row
pub const KEY_COLUMNS: u32 = 10;

/// Flat keyboard centered on the origin, with a grid of key caps on top
pub fn generate_keyboard(color: Rgb) -> Mesh {
    let mut mesh = generate_box(0.4, 0.02, 0.15, color);

    let key_color = vec3(0.2, 0.2, 0.2);
    for row in 0..KEY_ROWS {
        for column in 0..KEY_COLUMNS {
            let x = column as f32 * 0.038;
            let z = row as f32 * 0.035;
            add_quad(
                &mut mesh,
                [
                    vec3(-0.18 + x, 0.011, -0.03 + z),
                    vec3(-0.15 + x, 0.011, -0.03 + z),
                    vec3(-0.15 + x, 0.011, -0.06 + z),
                    vec3(-0.18 + x, 0.011, -0.06 + z),
                ],
                Vector3::unit_y(),
                key_color,
            );
        }
    }

    mesh
}

/// Tall two-door cabinet with vertical handles
pub fn generate_cabinet(color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.append_offset(generate_box(0.8, 2.0, 0.5, color), vec3(0.0, 1.0, 0.0));

    let door_color = color * 0.9;
    let front = Vector3::unit_z();

    // Left door
    add_quad(
        &mut mesh,
        [vec3(-0.38, 0.05, 0.26), vec3(-0.02, 0.05, 0.26), vec3(-0.02, 1.95, 0.26), vec3(-0.38, 1.95, 0.26)],
        front,
        door_color,
    );

    // Right door
    add_quad(
        &mut mesh,
        [vec3(0.02, 0.05, 0.26), vec3(0.38, 0.05, 0.26), vec3(0.38, 1.95, 0.26), vec3(0.02, 1.95, 0.26)],
        front,
        door_color,
    );

    let handle_color = vec3(0.7, 0.7, 0.7);
    for x in [-0.05, 0.05] {
        mesh.append_offset(generate_box(0.02, 0.15, 0.02, handle_color), vec3(x, 1.0, 0.28));
    }

    mesh
}

/// Facets around the lamp shade
pub const LAMP_SHADE_SEGMENTS: u32 = 8;

/// Hanging lamp: rod above the origin, shade and bulb below it
///
/// The origin is the point where the rod meets the shade; the rod rises
/// 0.3 from there, so hang it 0.3 below the ceiling.
pub fn generate_ceiling_lamp(bulb_color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();

    mesh.append_offset(
        generate_box(0.02, 0.3, 0.02, vec3(0.3, 0.3, 0.3)),
        vec3(0.0, 0.15, 0.0),
    );

    mesh.append_offset(
        generate_frustum_fan(0.1, 0.25, 0.15, LAMP_SHADE_SEGMENTS, vec3(0.9, 0.85, 0.7)),
        vec3(0.0, 0.0, 0.0),
    );

    mesh.append_offset(generate_box(0.08, 0.1, 0.08, bulb_color), vec3(0.0, -0.15, 0.0));

    mesh
}

/// Upright book centered on the origin, pages facing +Z
pub fn generate_book(cover_color: Rgb) -> Mesh {
    let mut mesh = generate_box(0.15, 0.22, 0.03, cover_color);

    add_quad(
        &mut mesh,
        [vec3(-0.07, -0.1, 0.016), vec3(0.07, -0.1, 0.016), vec3(0.07, 0.1, 0.016), vec3(-0.07, 0.1, 0.016)],
        Vector3::unit_z(),
        vec3(0.95, 0.95, 0.9),
    );

    mesh
}

/// Small white cube marking the light position
pub fn generate_light_marker() -> Mesh {
    generate_box(0.1, 0.1, 0.1, vec3(1.0, 1.0, 1.0))
}
