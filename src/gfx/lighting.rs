//! Point light state and the Phong lighting presets
//!
//! The shading stage computes, per fragment,
//! `(ambient + diffuse * max(N.L, 0) + specular * max(R.V, 0)^shininess) * light_color * base_color`.
//! [`phong_shade`] is the CPU version of that expression and is what the
//! WGSL program is checked against.

use cgmath::{ElementWise, InnerSpace, Point3, Vector3};
use log::info;

/// Specular exponent, shared by both presets
pub const SHININESS: f32 = 32.0;

/// Light color and term strengths handed to the lit program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingPreset {
    pub color: Vector3<f32>,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

impl LightingPreset {
    /// Warm, bright lamp
    pub const ON: Self = Self {
        color: Vector3 { x: 1.0, y: 0.95, z: 0.8 },
        ambient: 0.3,
        diffuse: 0.8,
        specular: 0.5,
    };

    /// Dim, cool light from outside. No term is ever zero.
    pub const OFF: Self = Self {
        color: Vector3 { x: 0.3, y: 0.3, z: 0.35 },
        ambient: 0.15,
        diffuse: 0.2,
        specular: 0.1,
    };
}

/// The single point light in the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub position: Point3<f32>,
    pub on: bool,
}

impl LightState {
    pub fn new(position: Point3<f32>) -> Self {
        Self { position, on: true }
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
        info!("Light {}", if self.on { "on" } else { "off" });
    }

    /// Preset for the current on/off state
    pub fn preset(&self) -> LightingPreset {
        if self.on {
            LightingPreset::ON
        } else {
            LightingPreset::OFF
        }
    }
}

/// Shade one surface point
///
/// `normal` need not be unit length. The result is not clamped; the
/// framebuffer write saturates it.
pub fn phong_shade(
    preset: &LightingPreset,
    light_position: Point3<f32>,
    view_position: Point3<f32>,
    fragment_position: Point3<f32>,
    normal: Vector3<f32>,
    base_color: Vector3<f32>,
) -> Vector3<f32> {
    let n = normal.normalize();
    let l = (light_position - fragment_position).normalize();
    let v = (view_position - fragment_position).normalize();
    let r = reflect(-l, n);

    let diffuse = n.dot(l).max(0.0);
    let specular = r.dot(v).max(0.0).powf(SHININESS);

    let strength = preset.ambient + preset.diffuse * diffuse + preset.specular * specular;
    (preset.color * strength).mul_element_wise(base_color)
}

fn reflect(incident: Vector3<f32>, normal: Vector3<f32>) -> Vector3<f32> {
    incident - normal * (2.0 * normal.dot(incident))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn near(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_presets_match_state() {
        let mut light = LightState::new(Point3::new(0.0, 3.5, 0.0));
        assert!(light.on);
        assert_eq!(light.preset(), LightingPreset::ON);

        light.toggle();
        assert!(!light.on);
        assert_eq!(light.preset(), LightingPreset::OFF);

        light.toggle();
        assert_eq!(light.preset(), LightingPreset::ON);
    }

    #[test]
    fn test_off_preset_never_zeroes_a_term() {
        let off = LightingPreset::OFF;
        assert!(off.ambient > 0.0 && off.diffuse > 0.0 && off.specular > 0.0);
        assert!(off.color.x > 0.0 && off.color.y > 0.0 && off.color.z > 0.0);
        assert!(off.ambient < LightingPreset::ON.ambient);
    }

    #[test]
    fn test_surface_facing_away_gets_ambient_only() {
        let white = Vector3::new(1.0, 1.0, 1.0);
        let shaded = phong_shade(
            &LightingPreset::OFF,
            Point3::new(0.0, 3.5, 0.0),
            Point3::new(0.0, 2.0, 8.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            white,
        );
        assert!(near(shaded, LightingPreset::OFF.color * 0.15));
        assert!(shaded.x > 0.0);
    }

    #[test]
    fn test_head_on_light_adds_full_diffuse_and_specular() {
        let grey = Vector3::new(0.5, 0.5, 0.5);
        let above = Point3::new(0.0, 2.0, 0.0);
        let shaded = phong_shade(
            &LightingPreset::ON,
            above,
            above,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            grey,
        );
        let strength = 0.3 + 0.8 + 0.5;
        let expected = LightingPreset::ON.color.mul_element_wise(grey) * strength;
        assert!(near(shaded, expected), "{shaded:?}");
    }

    #[test]
    fn test_grazing_view_drops_specular() {
        let red = Vector3::new(1.0, 0.0, 0.0);
        let shaded = phong_shade(
            &LightingPreset::ON,
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-5.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            red,
        );
        // Reflection points straight up while the eye sits near the horizon
        let expected = LightingPreset::ON.color.mul_element_wise(red) * (0.3 + 0.8);
        assert!((shaded - expected).magnitude() < 1e-3, "{shaded:?}");
        assert_eq!(shaded.y, 0.0);
    }
}
