//! Viewer configuration
//!
//! [`ViewerConfig::default`] reproduces the classic room scene: an 8×8×8 room,
//! a unit-sized object bouncing at (0.12, 0.08) per frame, and a camera 11
//! units in front of the room. Every field can be overridden with the
//! builder-style `with_*` methods.

use cgmath::{Deg, Rad, Vector3};
use std::path::PathBuf;

use crate::simulation::motion::Bounds;

/// Environment variable naming the model to import
pub const MODEL_ENV_VAR: &str = "ROOMVIEW_MODEL";

/// Model imported when nothing else is configured
pub const DEFAULT_MODEL_PATH: &str = "model/bunny.off";

/// Complete configuration for the viewer and its scene
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_size: (u32, u32),
    pub clear_color: [f64; 3],

    // Scene
    pub bounds: Bounds,
    pub object_size: f32,
    pub initial_velocity: Vector3<f32>,
    /// Z velocity applied while 3D motion is on
    pub z_speed: f32,

    // Meshes
    pub sphere_radius: f32,
    pub sphere_divisions: (u32, u32),
    pub cube_half_extent: f32,
    /// Uniform scale applied to the sphere and cube when drawn
    pub object_scale: f32,
    pub model_path: Option<PathBuf>,
    pub model_scale: f32,
    pub model_rotation_y: Rad<f32>,

    // Camera
    pub camera_eye: Vector3<f32>,
    pub camera_fov_y: Deg<f32>,
    pub camera_near: f32,
    pub camera_far: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Room Viewer".to_string(),
            window_size: (800, 600),
            clear_color: [0.2, 0.3, 0.3],

            bounds: Bounds::cube(4.0),
            object_size: 1.0,
            initial_velocity: Vector3::new(0.12, 0.08, 0.0),
            z_speed: -0.1,

            sphere_radius: 1.0,
            sphere_divisions: (20, 20),
            cube_half_extent: 1.0,
            object_scale: 0.5,
            model_path: Some(PathBuf::from(DEFAULT_MODEL_PATH)),
            model_scale: 0.03,
            model_rotation_y: Rad(40.02),

            camera_eye: Vector3::new(0.0, 0.0, 11.0),
            camera_fov_y: Deg(45.0),
            camera_near: 0.1,
            camera_far: 100.0,
        }
    }
}

impl ViewerConfig {
    /// Default configuration with the model path taken from `ROOMVIEW_MODEL`
    /// when it is set and non-empty
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(MODEL_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => config.with_model_path(path),
            _ => config,
        }
    }

    pub fn with_window_title(mut self, title: &str) -> Self {
        self.window_title = title.to_owned();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_clear_color(mut self, color: [f64; 3]) -> Self {
        self.clear_color = color;
        self
    }

    /// Sets the room the object bounces in (builder pattern)
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the object size used for the wall margin (builder pattern)
    pub fn with_object_size(mut self, size: f32) -> Self {
        self.object_size = size;
        self
    }

    pub fn with_initial_velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.initial_velocity = velocity;
        self
    }

    pub fn with_z_speed(mut self, z_speed: f32) -> Self {
        self.z_speed = z_speed;
        self
    }

    /// Sets the sphere radius and its longitude/latitude divisions
    pub fn with_sphere(mut self, radius: f32, longitude: u32, latitude: u32) -> Self {
        self.sphere_radius = radius;
        self.sphere_divisions = (longitude, latitude);
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Disables mesh import entirely
    pub fn without_model(mut self) -> Self {
        self.model_path = None;
        self
    }

    pub fn with_camera_eye(mut self, eye: Vector3<f32>) -> Self {
        self.camera_eye = eye;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.bounds.min, Vector3::new(-4.0, -4.0, -4.0));
        assert_eq!(config.bounds.max, Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(config.object_size, 1.0);
        assert_eq!(config.z_speed, -0.1);
        assert_eq!(config.sphere_divisions, (20, 20));
        assert_eq!(config.model_path, Some(PathBuf::from("model/bunny.off")));
    }

    #[test]
    fn test_builders() {
        let config = ViewerConfig::default()
            .with_object_size(0.5)
            .with_sphere(2.0, 8, 6)
            .with_model_path("assets/teapot.obj")
            .with_window_size(1024, 768);
        assert_eq!(config.object_size, 0.5);
        assert_eq!(config.sphere_radius, 2.0);
        assert_eq!(config.sphere_divisions, (8, 6));
        assert_eq!(config.window_size, (1024, 768));
        assert_eq!(
            config.model_path.as_deref(),
            Some(std::path::Path::new("assets/teapot.obj"))
        );
        assert!(config.without_model().model_path.is_none());
    }
}
