//! Viewer configuration

use std::path::PathBuf;

use cgmath::Point3;

use crate::gfx::scene::RoomDimensions;

/// Startup settings for the viewer
///
/// Defaults reproduce the stock room. Everything can be adjusted with the
/// `with_*` builders before handing the config to [`crate::app::ViewerApp`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Camera speed in world units per second
    pub move_speed: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Degrees of field of view per scroll line
    pub zoom_step: f32,
    pub clear_color: [f64; 3],
    pub vsync: bool,
    /// Read `phong.wgsl` and `light_marker.wgsl` from here instead of the embedded sources
    pub shader_dir: Option<PathBuf>,
    pub room: RoomDimensions,
    pub light_position: Point3<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Furnished Room".to_string(),
            width: 1280,
            height: 720,
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom_step: 1.0,
            clear_color: [0.1, 0.1, 0.15],
            vsync: true,
            shader_dir: None,
            room: RoomDimensions::default(),
            light_position: Point3::new(0.0, 3.5, 0.0),
        }
    }
}

impl ViewerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    pub fn with_clear_color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.clear_color = [r, g, b];
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = Some(dir.into());
        self
    }

    pub fn with_room(mut self, room: RoomDimensions) -> Self {
        self.room = room;
        self
    }

    pub fn with_light_position(mut self, position: Point3<f32>) -> Self {
        self.light_position = position;
        self
    }

    /// Width over height, guarding against a zero height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.clear_color;
        wgpu::Color { r, g, b, a: 1.0 }
    }
}
