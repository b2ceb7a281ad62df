//! Per-frame state
//!
//! The camera, the light and the frame clock live together in one
//! [`FrameContext`] that the event loop owns and hands to each step. Input
//! handlers write into it between frames; [`FrameContext::advance`] applies
//! everything at the start of a frame.

use std::time::Instant;

use crate::{
    config::ViewerConfig,
    gfx::{
        camera::{CameraController, CameraManager, FlyCamera},
        lighting::LightState,
        scene::Scene,
    },
};

/// Measures the time between consecutive frames
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last_frame: Instant,
    frame_count: u64,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            frame_count: 0,
        }
    }

    /// Start a new frame at `now`; returns the elapsed seconds since the last one
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        delta.as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Everything that changes from frame to frame
pub struct FrameContext {
    pub camera_manager: CameraManager,
    pub light: LightState,
    pub timer: FrameTimer,
}

impl FrameContext {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut camera = FlyCamera::default();
        camera.aspect = config.aspect_ratio();
        camera.update_view_proj();

        let controller =
            CameraController::new(config.move_speed, config.mouse_sensitivity, config.zoom_step);

        Self {
            camera_manager: CameraManager::new(camera, controller),
            light: LightState::new(config.light_position),
            timer: FrameTimer::new(Instant::now()),
        }
    }

    /// Start a frame at the current time
    pub fn step(&mut self, scene: &mut Scene) -> f32 {
        let delta_time = self.timer.tick(Instant::now());
        self.advance(scene, delta_time);
        delta_time
    }

    /// Apply pending input over `delta_time` seconds
    ///
    /// Moves the camera, flips the light if L was pressed, and keeps the
    /// light marker on the light.
    pub fn advance(&mut self, scene: &mut Scene, delta_time: f32) {
        if self.camera_manager.controller.take_light_toggle() {
            self.light.toggle();
        }
        self.camera_manager.update(delta_time);
        scene.track_light(self.light.position);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_manager.camera.resize_projection(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Vector3};
    use std::time::Duration;
    use winit::{event::ElementState, keyboard::KeyCode};

    use crate::gfx::scene::{Palette, RoomDimensions};

    fn room(light: Point3<f32>) -> Scene {
        Scene::furnished_room(RoomDimensions::default(), &Palette::default(), light)
    }

    #[test]
    fn test_timer_measures_between_ticks() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(start);
        let dt = timer.tick(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(timer.frame_count(), 1);

        let dt = timer.tick(start + Duration::from_millis(40));
        assert!((dt - 0.024).abs() < 1e-6);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_timer_never_goes_backwards() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(start + Duration::from_millis(5));
        assert_eq!(timer.tick(start), 0.0);
    }

    #[test]
    fn test_context_starts_from_config() {
        let config = ViewerConfig::default().with_size(1000, 500);
        let context = FrameContext::new(&config);
        assert_eq!(context.camera_manager.camera.aspect, 2.0);
        assert_eq!(context.camera_manager.controller.move_speed, 2.5);
        assert_eq!(context.light.position, Point3::new(0.0, 3.5, 0.0));
        assert!(context.light.on);
    }

    #[test]
    fn test_advance_moves_camera_and_toggles_light() {
        let config = ViewerConfig::default();
        let mut context = FrameContext::new(&config);
        let mut scene = room(config.light_position);

        let controller = &mut context.camera_manager.controller;
        controller.process_key(KeyCode::KeyW, ElementState::Pressed, false);
        controller.process_key(KeyCode::KeyL, ElementState::Pressed, false);

        context.advance(&mut scene, 0.5);
        assert!(!context.light.on);
        let position = context.camera_manager.camera.position;
        assert!((position.z - 6.75).abs() < 1e-5, "{position:?}");

        // The toggle fires once per press
        context.advance(&mut scene, 0.0);
        assert!(!context.light.on);
    }

    #[test]
    fn test_advance_keeps_marker_on_light() {
        let config = ViewerConfig::default();
        let mut context = FrameContext::new(&config);
        let mut scene = room(Point3::new(0.0, 0.0, 0.0));

        context.light.position = Point3::new(2.0, 3.0, 1.0);
        context.advance(&mut scene, 0.016);

        let marker = scene.get_object("light marker").expect("marker exists");
        assert_eq!(marker.position, Vector3::new(2.0, 3.0, 1.0));
    }
}
