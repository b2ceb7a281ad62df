use cgmath::{Vector2, Vector3, Zero};
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::fly_camera::{FlyCamera, ViewPreset};

/// Pixels of smooth scrolling that count as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

/// Keys held for continuous movement
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct MovementKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

/// Turns raw input into camera motion once per frame
///
/// Events only record state. Nothing touches the camera until
/// [`CameraController::update_camera`] runs, so a frame sees one consistent
/// snapshot of the input.
pub struct CameraController {
    /// World units per second
    pub move_speed: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
    /// Degrees of field of view per scroll line
    pub zoom_step: f32,
    keys: MovementKeys,
    mouse_delta: Vector2<f32>,
    scroll_lines: f32,
    pending_preset: Option<ViewPreset>,
    light_toggle_requested: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(2.5, 0.1, 1.0)
    }
}

impl CameraController {
    pub fn new(move_speed: f32, sensitivity: f32, zoom_step: f32) -> Self {
        Self {
            move_speed,
            sensitivity,
            zoom_step,
            keys: MovementKeys::default(),
            mouse_delta: Vector2::zero(),
            scroll_lines: 0.0,
            pending_preset: None,
            light_toggle_requested: false,
        }
    }

    /// Raw mouse motion drives the look direction
    pub fn process_events(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.process_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Wheel input is taken from the window, which every platform reports
    pub fn process_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            self.process_scroll_delta(delta);
        }
    }

    /// Convert a wheel delta to lines; smooth scrolling counts 40 pixels per line
    pub fn process_scroll_delta(&mut self, delta: &MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, scroll) => *scroll,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                *scroll as f32 / PIXELS_PER_LINE
            }
        };
        self.process_scroll(lines);
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.process_key(code, event.state, event.repeat);
        }
    }

    /// Record a key transition
    ///
    /// Movement keys are level-triggered. Preset and light keys fire once per
    /// press; auto-repeat is ignored.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW => self.keys.forward = pressed,
            KeyCode::KeyS => self.keys.backward = pressed,
            KeyCode::KeyA => self.keys.left = pressed,
            KeyCode::KeyD => self.keys.right = pressed,
            KeyCode::Space => self.keys.up = pressed,
            KeyCode::ShiftLeft => self.keys.down = pressed,
            _ if !pressed || repeat => (),
            KeyCode::Digit1 => self.pending_preset = Some(ViewPreset::Front),
            KeyCode::Digit2 => self.pending_preset = Some(ViewPreset::Top),
            KeyCode::Digit3 => self.pending_preset = Some(ViewPreset::Side),
            KeyCode::Digit4 => self.pending_preset = Some(ViewPreset::Corner),
            KeyCode::KeyL => self.light_toggle_requested = !self.light_toggle_requested,
            _ => (),
        }
    }

    /// Raw pointer motion in pixels, +y pointing down the screen
    pub fn process_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vector2::new(dx, dy);
    }

    /// Scroll in wheel lines, positive away from the user
    pub fn process_scroll(&mut self, lines: f32) {
        self.scroll_lines += lines;
    }

    /// Consume the L key press, if any, since the last call
    pub fn take_light_toggle(&mut self) -> bool {
        std::mem::take(&mut self.light_toggle_requested)
    }

    /// Drop held keys and pending motion, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.keys = MovementKeys::default();
        self.mouse_delta = Vector2::zero();
        self.scroll_lines = 0.0;
    }

    /// Apply look, zoom and movement, then any preset jump
    pub fn update_camera(&mut self, camera: &mut FlyCamera, delta_time: f32) {
        let look = std::mem::replace(&mut self.mouse_delta, Vector2::zero());
        camera.rotate(look.x * self.sensitivity, -look.y * self.sensitivity);

        let scroll = std::mem::take(&mut self.scroll_lines);
        camera.zoom(scroll * self.zoom_step);

        let front = camera.front();
        let right = camera.right();
        let up = Vector3::unit_y();
        let mut direction = Vector3::zero();
        if self.keys.forward {
            direction += front;
        }
        if self.keys.backward {
            direction -= front;
        }
        if self.keys.right {
            direction += right;
        }
        if self.keys.left {
            direction -= right;
        }
        if self.keys.up {
            direction += up;
        }
        if self.keys.down {
            direction -= up;
        }
        camera.translate(direction * self.move_speed * delta_time);

        if let Some(preset) = self.pending_preset.take() {
            camera.apply_preset(preset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Point3};

    const EPSILON: f32 = 1e-5;

    fn press(controller: &mut CameraController, code: KeyCode) {
        controller.process_key(code, ElementState::Pressed, false);
    }

    fn release(controller: &mut CameraController, code: KeyCode) {
        controller.process_key(code, ElementState::Released, false);
    }

    fn near(a: Point3<f32>, b: Point3<f32>) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_forward_moves_speed_times_dt() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        press(&mut controller, KeyCode::KeyW);
        controller.update_camera(&mut camera, 1.0);
        assert!(near(camera.position, Point3::new(0.0, 2.0, 5.5)), "{:?}", camera.position);

        controller.update_camera(&mut camera, 0.5);
        assert!(near(camera.position, Point3::new(0.0, 2.0, 4.25)));

        release(&mut controller, KeyCode::KeyW);
        controller.update_camera(&mut camera, 1.0);
        assert!(near(camera.position, Point3::new(0.0, 2.0, 4.25)));
    }

    #[test]
    fn test_strafe_and_vertical_movement() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        press(&mut controller, KeyCode::KeyD);
        press(&mut controller, KeyCode::Space);
        controller.update_camera(&mut camera, 0.4);
        assert!(near(camera.position, Point3::new(1.0, 3.0, 8.0)), "{:?}", camera.position);

        release(&mut controller, KeyCode::KeyD);
        release(&mut controller, KeyCode::Space);
        press(&mut controller, KeyCode::KeyA);
        press(&mut controller, KeyCode::ShiftLeft);
        controller.update_camera(&mut camera, 0.4);
        assert!(near(camera.position, Point3::new(0.0, 2.0, 8.0)));
    }

    #[test]
    fn test_mouse_motion_scaled_and_inverted() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        controller.process_mouse_motion(50.0, 0.0);
        controller.process_mouse_motion(50.0, 100.0);
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.yaw - -80.0).abs() < EPSILON);
        // Moving the mouse down looks down
        assert!((camera.pitch - -10.0).abs() < EPSILON);

        // Deltas are consumed
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.yaw - -80.0).abs() < EPSILON);
    }

    #[test]
    fn test_device_events_feed_look_only() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        controller.process_events(&DeviceEvent::MouseMotion { delta: (-10.0, 0.0) });
        controller.process_events(&DeviceEvent::MouseWheel {
            delta: MouseScrollDelta::LineDelta(0.0, 3.0),
        });
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.yaw - -91.0).abs() < EPSILON);
        assert_eq!(camera.fov, 45.0);
    }

    #[test]
    fn test_wheel_lines_and_pixels_zoom() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        controller.process_scroll_delta(&MouseScrollDelta::LineDelta(0.0, 3.0));
        controller.update_camera(&mut camera, 0.016);
        assert_eq!(camera.fov, 42.0);

        controller.process_scroll_delta(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0)));
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.fov - 44.0).abs() < EPSILON);
    }

    #[test]
    fn test_preset_is_edge_triggered() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        press(&mut controller, KeyCode::Digit3);
        controller.update_camera(&mut camera, 0.016);
        assert_eq!(camera.position, Point3::new(1.0, 1.5, -3.5));

        // Holding the key does not keep snapping back
        camera.translate(Vector3::new(0.0, 1.0, 0.0));
        controller.process_key(KeyCode::Digit3, ElementState::Pressed, true);
        controller.update_camera(&mut camera, 0.016);
        assert_eq!(camera.position, Point3::new(1.0, 2.5, -3.5));
    }

    #[test]
    fn test_preset_overrides_movement_in_same_frame() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        press(&mut controller, KeyCode::KeyW);
        press(&mut controller, KeyCode::Digit1);
        controller.update_camera(&mut camera, 1.0);
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 3.0));
        assert_eq!((camera.yaw, camera.pitch), (-90.0, -5.0));
    }

    #[test]
    fn test_light_toggle_consumed_once() {
        let mut controller = CameraController::default();
        assert!(!controller.take_light_toggle());

        press(&mut controller, KeyCode::KeyL);
        controller.process_key(KeyCode::KeyL, ElementState::Pressed, true);
        release(&mut controller, KeyCode::KeyL);
        assert!(controller.take_light_toggle());
        assert!(!controller.take_light_toggle());
    }

    #[test]
    fn test_reset_releases_keys() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        press(&mut controller, KeyCode::KeyS);
        controller.process_mouse_motion(30.0, 0.0);
        controller.reset();
        controller.update_camera(&mut camera, 1.0);
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 8.0));
        assert_eq!(camera.yaw, -90.0);
    }
}
