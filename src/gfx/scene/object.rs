use cgmath::{Deg, Matrix, Matrix4, SquareMatrix, Vector3};
use log::debug;
use wgpu::util::DeviceExt;

use crate::gfx::geometry::Mesh;

/// Which program draws an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Phong-lit by the scene light
    Lit,
    /// Flat light color, only drawn while the light is on
    LightMarker,
}

/// Per-object uniform content. MUST match `ObjectUniform` in the shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of `model`, for transforming normals
    pub normal: [[f32; 4]; 4],
}

impl ObjectUniform {
    pub fn from_model(model: Matrix4<f32>) -> Self {
        let normal = model.invert().unwrap_or_else(Matrix4::identity).transpose();
        Self {
            model: model.into(),
            normal: normal.into(),
        }
    }
}

/// GPU side of a scene object. Buffers are released when this is dropped.
pub struct ObjectGpuResources {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub transform_buffer: wgpu::Buffer,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A named mesh placed in the world
///
/// The model matrix is always `T * Rx * Ry * Rz * S`: scale and rotate about
/// the local origin, then move into place. Rotation is in degrees.
pub struct SceneObject {
    pub name: String,
    mesh: Mesh,
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub shading: Shading,
    pub gpu_resources: Option<ObjectGpuResources>, // None until upload() is called
}

impl SceneObject {
    /// Wrap a mesh at the origin with no rotation and unit scale
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            shading: Shading::Lit,
            gpu_resources: None,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    /// Euler angles in degrees, applied X then Y then Z in local space
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vector3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Upload the mesh and create the transform uniform
    ///
    /// Replaces (and thereby releases) any previous upload. Empty meshes are
    /// skipped since wgpu rejects zero-sized vertex buffers.
    pub fn upload(&mut self, device: &wgpu::Device, transform_layout: &wgpu::BindGroupLayout) {
        if self.mesh.is_empty() {
            debug!("Skipping upload of empty mesh '{}'", self.name);
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", self.name)),
            contents: bytemuck::cast_slice(self.mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform = ObjectUniform::from_model(self.model_matrix());
        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Transform Buffer", self.name)),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Transform Bind Group", self.name)),
            layout: transform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
        });

        debug!(
            "Uploaded '{}': {} vertices ({} triangles)",
            self.name,
            self.mesh.vertex_count(),
            self.mesh.triangle_count()
        );

        self.gpu_resources = Some(ObjectGpuResources {
            vertex_buffer,
            vertex_count: self.mesh.vertex_count() as u32,
            transform_buffer,
            transform_bind_group,
        });
    }

    /// Write the current model matrix to the GPU if uploaded
    pub fn update_transform(&self, queue: &wgpu::Queue) {
        if let Some(gpu_resources) = &self.gpu_resources {
            let uniform = ObjectUniform::from_model(self.model_matrix());
            queue.write_buffer(&gpu_resources.transform_buffer, 0, bytemuck::bytes_of(&uniform));
        }
    }

    /// Drop the GPU buffers; the mesh stays and can be uploaded again
    pub fn release(&mut self) {
        self.gpu_resources = None;
    }

    pub fn is_uploaded(&self) -> bool {
        self.gpu_resources.is_some()
    }
}

pub trait DrawObject<'a> {
    fn draw_object(&mut self, object: &'a SceneObject);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    /// Binds the object's transform at group 1 and draws its triangle list
    fn draw_object(&mut self, object: &'b SceneObject) {
        let Some(gpu_resources) = &object.gpu_resources else {
            return; // Skip drawing if not uploaded
        };

        self.set_bind_group(1, &gpu_resources.transform_bind_group, &[]);
        self.set_vertex_buffer(0, gpu_resources.vertex_buffer.slice(..));
        self.draw(0..gpu_resources.vertex_count, 0..1);
    }
}
