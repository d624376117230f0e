//! Startup scene description: camera, orbit controller, lights, and floor.
//!
//! Applied once by the render host when the scene is created; nothing here
//! changes at runtime. The interaction state machine only ever replaces the
//! displayed shape.

use std::f32::consts::PI;

use glam::Vec3;

use crate::color::Color;

/// Perspective camera defaults.
#[derive(Clone, Copy, Debug)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Position when the scene first opens.
    pub initial_position: Vec3,
    /// Orbit-reset target. The controller's reset must be configured to
    /// restore this framing; `ViewState::camera_resets` ticking up tells
    /// the host to trigger it.
    pub home_position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 1000.0,
            initial_position: Vec3::new(35.0, 5.0, -30.0),
            home_position: Vec3::new(0.0, 5.0, -40.0),
        }
    }
}

/// Orbit controller defaults.
#[derive(Clone, Copy, Debug)]
pub struct OrbitConfig {
    pub damping: f32,
    pub zoom_enabled: bool,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: 0.25,
            zoom_enabled: true,
        }
    }
}

/// One rectangular area light.
#[derive(Clone, Copy, Debug)]
pub struct RectLight {
    pub color: Color,
    pub intensity: f32,
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    /// Yaw about +Y in radians.
    pub rotation_y: f32,
}

/// Grey slab under the shape.
#[derive(Clone, Copy, Debug)]
pub struct FloorConfig {
    pub size: Vec3,
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub position: Vec3,
}

/// The whole startup scene.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    /// Blue/green/red trio in front of the shape plus a white back light.
    pub lights: [RectLight; 4],
    pub floor: FloorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let panel = |color, position| RectLight {
            color,
            intensity: 5.0,
            width: 10.0,
            height: 28.0,
            position,
            rotation_y: 0.0,
        };
        Self {
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            lights: [
                panel(Color::BLUE, Vec3::new(-13.0, 0.0, 15.0)),
                panel(Color::GREEN, Vec3::new(0.0, 0.0, 15.0)),
                panel(Color::RED, Vec3::new(13.0, 0.0, 15.0)),
                RectLight {
                    color: Color::WHITE,
                    intensity: 5.0,
                    width: 15.0,
                    height: 25.0,
                    position: Vec3::new(0.0, 0.0, -80.0),
                    rotation_y: PI,
                },
            ],
            floor: FloorConfig {
                size: Vec3::new(1000.0, 0.1, 1000.0),
                color: Color::from_rgb8(0xbc, 0xbc, 0xbc),
                roughness: 0.1,
                metalness: 0.0,
                position: Vec3::new(0.0, -12.5, -35.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_trio_faces_forward_back_light_yawed() {
        let scene = SceneConfig::default();
        for light in &scene.lights[..3] {
            assert_eq!(light.rotation_y, 0.0);
            assert_eq!(light.position.z, 15.0);
        }
        assert_eq!(scene.lights[3].rotation_y, PI);
        assert!(scene.lights[3].position.z < 0.0);
    }

    #[test]
    fn test_camera_home_differs_from_initial() {
        let camera = CameraConfig::default();
        assert_ne!(camera.initial_position, camera.home_position);
        assert_eq!(camera.home_position, Vec3::new(0.0, 5.0, -40.0));
    }
}
