//! # Procedural Geometry Generation
//!
//! Every piece of the room is built here from a handful of dimensions and
//! colors; no model files are loaded.
//!
//! ## Building blocks
//!
//! - **Quad**: four coplanar corners expanded into two triangles
//! - **Box**: a closed, axis-aligned box centered at its local origin
//! - **Radial fan**: a faceted frustum side, used for the lamp shade
//!
//! Compound pieces (desk, chair, monitor, ...) are assembled by appending
//! sub-meshes with a local translation, see [`Mesh::append_offset`].
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use workroom::gfx::geometry::{generate_box, furniture::generate_desk};
//!
//! let cube = generate_box(2.0, 2.0, 2.0, Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(cube.vertex_count(), 36);
//!
//! let desk = generate_desk(Vector3::new(0.55, 0.4, 0.25));
//! assert_eq!(desk.vertex_count() % 3, 0);
//! ```

pub mod furniture;
pub mod primitives;
pub mod room;

pub use primitives::*;

use cgmath::Vector3;

use crate::gfx::scene::vertex::Vertex3D;

/// Linear RGB color, components in 0..=1
pub type Rgb = Vector3<f32>;

/// A triangle list.
///
/// The vertex count is always a multiple of three and insertion order is the
/// triangle winding, so vertices are only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate the mesh as triangles, in winding order
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex3D]> + '_ {
        self.vertices.chunks_exact(3)
    }

    /// Append a single triangle. All three vertices share `normal` and `color`.
    pub fn push_triangle(
        &mut self,
        corners: [Vector3<f32>; 3],
        normal: Vector3<f32>,
        color: Rgb,
    ) {
        for corner in corners {
            self.vertices.push(Vertex3D::new(corner, normal, color));
        }
    }

    /// Append every vertex of `part`, translated by `offset`.
    ///
    /// This is a one-off bake into local space, used to place the parts of a
    /// compound piece relative to each other. It never rotates.
    pub fn append_offset(&mut self, part: Mesh, offset: Vector3<f32>) {
        self.vertices.reserve(part.vertices.len());
        for mut vertex in part.vertices {
            vertex.position = (vertex.position() + offset).into();
            self.vertices.push(vertex);
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vector3<f32>, Vector3<f32>)> {
        let first = self.vertices.first()?.position();
        Some(self.vertices.iter().skip(1).fold((first, first), |(min, max), v| {
            let p = v.position();
            (
                Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }
}

/// Indices of triangles whose corner order disagrees with their stored normal
#[cfg(test)]
pub(crate) fn reversed_triangles(mesh: &Mesh) -> Vec<usize> {
    use cgmath::InnerSpace;

    mesh.triangles()
        .enumerate()
        .filter(|(_, triangle)| {
            let a = triangle[0].position();
            let geometric = (triangle[1].position() - a).cross(triangle[2].position() - a);
            geometric.dot(triangle[0].normal()) <= 0.0
        })
        .map(|(index, _)| index)
        .collect()
}
