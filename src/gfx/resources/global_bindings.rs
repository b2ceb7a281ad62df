//! Global uniform bindings for camera and light data
//!
//! One uniform block per frame, bound at group 0 by both pipelines. It holds
//! the camera matrices and every named shading parameter of the lit program.

use crate::{
    gfx::{
        camera::CameraUniform,
        lighting::{LightState, SHININESS},
    },
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in the shaders exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_proj: [[f32; 4]; 4],
    view_position: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 3],
    ambient_strength: f32,
    diffuse_strength: f32,
    specular_strength: f32,
    shininess: f32,
    _padding: f32,
}
// 64 + 16 + 16 + 16 + 16 = 128 bytes

impl GlobalUBOContent {
    /// Pack the camera and the light's current preset
    pub fn new(camera: &CameraUniform, light: &LightState) -> Self {
        let preset = light.preset();
        Self {
            view_proj: camera.view_proj,
            view_position: camera.view_position,
            light_position: light.position.to_homogeneous().into(),
            light_color: preset.color.into(),
            ambient_strength: preset.ambient,
            diffuse_strength: preset.diffuse,
            specular_strength: preset.specular,
            shininess: SHININESS,
            _padding: 0.0,
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called once per frame before any draw is recorded.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: &CameraUniform,
    light: &LightState,
) {
    ubo.update_content(queue, GlobalUBOContent::new(camera, light));
}

/// Manages bind group layouts and bind groups for global uniforms
///
/// Bound to slot 0 in all render pipelines.
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform_of::<GlobalUBOContent>())
            .create(device, "Globals Bind Group Layout");

        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Globals Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Per-object transform layout, bound at group 1
pub fn create_object_bind_group_layout(device: &wgpu::Device) -> BindGroupLayoutWithDesc {
    BindGroupLayoutBuilder::new()
        .next_binding_vertex(binding_types::uniform_of::<crate::gfx::scene::ObjectUniform>())
        .create(device, "Object Transform Layout")
}
