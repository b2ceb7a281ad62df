//! WGPU-based rendering engine for the workroom viewer
//!
//! Owns the surface, device and queue, the depth buffer, the global
//! uniforms and the two pipelines: Phong for the room, unlit for the light
//! marker. Back-face culling is off; every mesh is drawn from both sides.

use log::{debug, info, warn};
use std::sync::Arc;
use wgpu::Device;

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    gfx::{
        camera::CameraUniform,
        lighting::LightState,
        resources::{
            create_object_bind_group_layout, update_global_ubo, GlobalBindings, GlobalUBO,
            TextureResource,
        },
        scene::{DrawObject, Scene, Shading},
    },
    wgpu_utils::BindGroupLayoutWithDesc,
};

use super::{
    pipeline_manager::{PipelineConfig, PipelineManager},
    shaders::{ShaderSources, LIGHT_MARKER_SHADER, PHONG_SHADER},
};

pub const PHONG_PIPELINE: &str = "Phong";
pub const LIGHT_MARKER_PIPELINE: &str = "LightMarker";

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    clear_color: wgpu::Color,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_layout: BindGroupLayoutWithDesc,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Compiles both shader programs; any shader or pipeline error aborts
    /// initialization.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        viewer_config: &ViewerConfig,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let adapter_info = adapter.get_info();
        info!("Using {} ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(ViewerError::UnsupportedSurface)?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: present_mode(viewer_config.vsync),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        debug!("Surface configured: {:?} {}x{}", format, config.width, config.height);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let object_layout = create_object_bind_group_layout(&device);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        let sources = ShaderSources::load(viewer_config.shader_dir.as_deref())?;
        for (name, source) in sources.iter() {
            pipeline_manager.load_shader(name, source)?;
        }

        let layouts = vec![
            global_bindings.bind_group_layout().clone(),
            object_layout.layout.clone(),
        ];

        // No culling: walls and panels are single-sided quads seen from both sides
        pipeline_manager.register_pipeline(
            PHONG_PIPELINE,
            PipelineConfig::default()
                .with_label(PHONG_PIPELINE)
                .with_shader(PHONG_SHADER)
                .with_cull_mode(None)
                .with_color_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_bind_group_layouts(layouts.clone()),
        );

        pipeline_manager.register_pipeline(
            LIGHT_MARKER_PIPELINE,
            PipelineConfig::default()
                .with_label(LIGHT_MARKER_PIPELINE)
                .with_shader(LIGHT_MARKER_SHADER)
                .with_cull_mode(None)
                .with_color_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_bind_group_layouts(layouts),
        );

        pipeline_manager.create_all_pipelines()?;
        debug!("{:?}", pipeline_manager.get_stats());

        Ok(RenderEngine {
            device: device_handle,
            config,
            clear_color: viewer_config.wgpu_clear_color(),
            surface,
            queue: queue_handle,
            depth_texture,
            pipeline_manager,
            global_bindings,
            global_ubo,
            object_layout,
        })
    }

    /// Uploads every scene object using the engine's transform layout
    pub fn upload_scene(&self, scene: &mut Scene) {
        scene.init_gpu_resources(&self.device, &self.object_layout.layout);
    }

    /// Renders one frame
    ///
    /// Objects are drawn in scene order. Light markers are skipped while the
    /// light is off. A lost or outdated surface is reconfigured and the frame
    /// dropped; running out of memory is returned as an error.
    pub fn render_frame(&mut self, scene: &Scene, light_on: bool) -> Result<()> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out waiting for the next frame");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            let mut bound = None;
            for object in scene.objects.iter() {
                if object.shading == Shading::LightMarker && !light_on {
                    continue;
                }

                if bound != Some(object.shading) {
                    let Some(pipeline) = self.pipeline_manager.get_pipeline(pipeline_for(object.shading))
                    else {
                        continue;
                    };
                    render_pass.set_pipeline(pipeline);
                    bound = Some(object.shading);
                }

                render_pass.draw_object(object);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Writes this frame's camera and light into the global uniforms
    pub fn update(&mut self, camera_uniform: &CameraUniform, light: &LightState) {
        update_global_ubo(&mut self.global_ubo, &self.queue, camera_uniform, light);
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

fn pipeline_for(shading: Shading) -> &'static str {
    match shading {
        Shading::Lit => PHONG_PIPELINE,
        Shading::LightMarker => LIGHT_MARKER_PIPELINE,
    }
}

fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shading_has_its_own_pipeline() {
        assert_eq!(pipeline_for(Shading::Lit), PHONG_PIPELINE);
        assert_eq!(pipeline_for(Shading::LightMarker), LIGHT_MARKER_PIPELINE);
    }

    #[test]
    fn test_present_mode_follows_vsync() {
        assert_eq!(present_mode(true), wgpu::PresentMode::AutoVsync);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }
}
