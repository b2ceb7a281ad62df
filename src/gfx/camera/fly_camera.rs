use super::camera_utils::{Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const MIN_PITCH: f32 = -89.0;
pub const MAX_PITCH: f32 = 89.0;
pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 90.0;

/// Fixed viewpoints bound to the number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Looking at the desk and window from the middle of the room
    Front,
    /// High above the desk, looking almost straight down
    Top,
    /// Beside the desk, looking along it
    Side,
    /// From the door corner, taking in the whole room
    Corner,
}

impl ViewPreset {
    /// Eye position, yaw and pitch in degrees
    pub fn pose(self) -> (Point3<f32>, f32, f32) {
        match self {
            Self::Front => (Point3::new(0.0, 2.0, 3.0), -90.0, -5.0),
            Self::Top => (Point3::new(-2.0, 6.0, -2.0), -90.0, -75.0),
            Self::Side => (Point3::new(1.0, 1.5, -3.5), -180.0, 0.0),
            Self::Corner => (Point3::new(3.0, 2.5, 2.0), -130.0, -15.0),
        }
    }
}

/// First-person camera that flies freely through the room
///
/// Orientation is kept as yaw and pitch in degrees. Yaw -90 looks down -Z.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for FlyCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 2.0, 8.0), -90.0, 0.0, 1280.0 / 720.0)
    }
}

impl FlyCamera {
    pub fn new(position: Point3<f32>, yaw: f32, pitch: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            fov: 45.0,
            up: Vector3::unit_y(),
            aspect,
            znear: 0.1,
            zfar: 100.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    /// Unit view direction derived from yaw and pitch
    pub fn front(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = Rad::from(Deg(self.yaw)).0.sin_cos();
        let (pitch_sin, pitch_cos) = Rad::from(Deg(self.pitch)).0.sin_cos();
        Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
    }

    /// Unit vector to the camera's right, always horizontal
    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(self.up).normalize()
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.front(), self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(Deg(self.fov), self.aspect, self.znear, self.zfar)
    }

    /// Turn by a yaw/pitch offset in degrees; pitch stays within +-89
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Narrow the field of view by `amount` degrees, clamped to [1, 90]
    pub fn zoom(&mut self, amount: f32) {
        self.fov = (self.fov - amount).clamp(MIN_FOV, MAX_FOV);
    }

    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.position += offset;
    }

    /// Jump to one of the fixed viewpoints; field of view is kept
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        let (position, yaw, pitch) = preset.pose();
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Ignores zero-sized surfaces, which winit reports while minimized
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = self.position.to_homogeneous().into();
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn near(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_initial_pose_looks_down_negative_z() {
        let camera = FlyCamera::default();
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 8.0));
        assert_eq!(camera.fov, 45.0);
        assert!(near(camera.front(), Vector3::new(0.0, 0.0, -1.0)));
        assert!(near(camera.right(), Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_front_follows_yaw_and_pitch() {
        let mut camera = FlyCamera::default();
        camera.yaw = 0.0;
        assert!(near(camera.front(), Vector3::unit_x()));

        camera.pitch = 45.0;
        let front = camera.front();
        assert!((front.magnitude() - 1.0).abs() < EPSILON);
        assert!((front.y - 45f32.to_radians().sin()).abs() < EPSILON);
        assert!(camera.right().y.abs() < EPSILON);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.rotate(10.0, 200.0);
        assert_eq!(camera.pitch, MAX_PITCH);
        assert_eq!(camera.yaw, -80.0);
        camera.rotate(0.0, -500.0);
        assert_eq!(camera.pitch, MIN_PITCH);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.zoom(5.0);
        assert_eq!(camera.fov, 40.0);
        camera.zoom(100.0);
        assert_eq!(camera.fov, MIN_FOV);
        camera.zoom(-500.0);
        assert_eq!(camera.fov, MAX_FOV);
    }

    #[test]
    fn test_presets() {
        let mut camera = FlyCamera::default();
        camera.fov = 30.0;

        camera.apply_preset(ViewPreset::Top);
        assert_eq!(camera.position, Point3::new(-2.0, 6.0, -2.0));
        assert_eq!((camera.yaw, camera.pitch), (-90.0, -75.0));
        assert_eq!(camera.fov, 30.0);

        camera.apply_preset(ViewPreset::Side);
        assert!(near(camera.front(), Vector3::new(-1.0, 0.0, 0.0)));

        camera.apply_preset(ViewPreset::Corner);
        assert_eq!(camera.position, Point3::new(3.0, 2.5, 2.0));
        assert_eq!((camera.yaw, camera.pitch), (-130.0, -15.0));

        camera.apply_preset(ViewPreset::Front);
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 3.0));
        assert_eq!((camera.yaw, camera.pitch), (-90.0, -5.0));
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let mut camera = FlyCamera::default();
        camera.apply_preset(ViewPreset::Corner);
        let eye = camera.view_matrix() * camera.position.to_homogeneous();
        assert!(near(eye.truncate(), Vector3::new(0.0, 0.0, 0.0)));

        let ahead = camera.position + camera.front() * 2.0;
        let ahead = camera.view_matrix() * ahead.to_homogeneous();
        assert!(near(ahead.truncate(), Vector3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn test_projection_maps_depth_range_to_zero_one() {
        let camera = FlyCamera::default();
        let proj = camera.projection_matrix();

        let near_plane = proj * Vector4::new(0.0, 0.0, -camera.znear, 1.0);
        let far_plane = proj * Vector4::new(0.0, 0.0, -camera.zfar, 1.0);
        assert!((near_plane.z / near_plane.w).abs() < 1e-4);
        assert!((far_plane.z / far_plane.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_keeps_vertical_field_of_view() {
        let mut camera = FlyCamera::default();
        camera.aspect = 1.0;
        let proj = camera.projection_matrix();

        // A point on the top edge of the frustum lands on the top of the screen
        let distance = 5.0;
        let half_height = distance * Rad::from(Deg(camera.fov / 2.0)).0.tan();
        let edge = proj * Vector4::new(0.0, half_height, -distance, 1.0);
        assert!((edge.y / edge.w - 1.0).abs() < 1e-4);

        let side = proj * Vector4::new(half_height, 0.0, -distance, 1.0);
        assert!((side.x / side.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_resize_ignores_zero_size() {
        let mut camera = FlyCamera::default();
        camera.resize_projection(800, 400);
        assert_eq!(camera.aspect, 2.0);
        camera.resize_projection(0, 400);
        camera.resize_projection(800, 0);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_uniform_tracks_position() {
        let mut camera = FlyCamera::default();
        camera.translate(Vector3::new(1.0, 0.0, 0.0));
        camera.update_view_proj();
        assert_eq!(camera.uniform.view_position, [1.0, 2.0, 8.0, 1.0]);
        let expected: [[f32; 4]; 4] = camera.build_view_projection_matrix().into();
        assert_eq!(camera.uniform.view_proj, expected);
    }
}
