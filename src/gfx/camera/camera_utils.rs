use cgmath::{Matrix4, SquareMatrix};
use winit::event::{DeviceEvent, KeyEvent, WindowEvent};

use super::{camera_controller::CameraController, fly_camera::FlyCamera};

pub struct CameraManager {
    pub camera: FlyCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: FlyCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    pub fn process_event(&mut self, event: &DeviceEvent) {
        self.controller.process_events(event);
    }

    pub fn process_window_event(&mut self, event: &WindowEvent) {
        self.controller.process_window_events(event);
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.controller.process_keyed_events(event);
    }

    /// Apply the input gathered since the last frame and refresh the uniform
    pub fn update(&mut self, delta_time: f32) {
        self.controller.update_camera(&mut self.camera, delta_time);
        self.camera.update_view_proj();
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::ViewPreset;
    use winit::keyboard::KeyCode;
    use winit::event::ElementState;

    #[test]
    fn test_update_refreshes_uniform() {
        let mut manager = CameraManager::new(FlyCamera::default(), CameraController::default());
        manager.controller.process_key(KeyCode::Digit2, ElementState::Pressed, false);
        manager.update(0.016);

        let (position, _, _) = ViewPreset::Top.pose();
        assert_eq!(manager.camera.position, position);
        assert_eq!(manager.camera.uniform.view_position, [-2.0, 6.0, -2.0, 1.0]);
        let expected: [[f32; 4]; 4] = manager.camera.build_view_projection_matrix().into();
        assert_eq!(manager.camera.uniform.view_proj, expected);
    }
}
