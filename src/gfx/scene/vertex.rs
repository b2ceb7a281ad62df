//! # Vertex Data Structures
//!
//! This module defines the vertex format shared by every generated mesh.
//! Each vertex carries its own flat albedo color, so no material lookup is
//! needed at draw time.

use cgmath::Vector3;

/// A 3D vertex with position, normal and color data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
///
/// # Fields
///
/// - `position`: 3D position coordinates [x, y, z]
/// - `normal`: 3D normal vector [nx, ny, nz] for lighting calculations
/// - `color`: linear RGB albedo, modulated by the lighting stage
///
/// # Examples
///
/// ```no_run
/// use cgmath::Vector3;
/// use workroom::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D::new(
///     Vector3::new(0.0, 1.0, 0.0),
///     Vector3::unit_y(),
///     Vector3::new(0.6, 0.5, 0.4),
/// );
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Linear RGB color
    pub color: [f32; 3],
}

impl Vertex3D {
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>, color: Vector3<f32>) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            color: color.into(),
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position.into()
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.normal.into()
    }

    pub fn color(&self) -> Vector3<f32> {
        self.color.into()
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// # Returns
    ///
    /// A [`wgpu::VertexBufferLayout`] that describes:
    /// - Attribute 0: Position (Float32x3) at shader location 0
    /// - Attribute 1: Normal (Float32x3) at shader location 1
    /// - Attribute 2: Color (Float32x3) at shader location 2
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: (mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
