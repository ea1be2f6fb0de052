use super::camera_utils::{Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};
use cgmath::*;

use crate::config::ViewerConfig;

/// Perspective camera looking at a fixed target
///
/// The viewer never moves its camera; only the aspect ratio follows the
/// window.
#[derive(Debug, Clone, Copy)]
pub struct FixedCamera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for FixedCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl FixedCamera {
    /// Camera at `eye` looking at the origin with +Y up
    pub fn new(eye: Vector3<f32>, fovy: impl Into<Rad<f32>>, aspect: f32) -> Self {
        Self {
            eye: Point3::from_vec(eye),
            target: Point3::origin(),
            up: Vector3::unit_y(),
            aspect,
            fovy: fovy.into(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Camera described by the viewer configuration
    pub fn from_config(config: &ViewerConfig) -> Self {
        let (width, height) = config.window_size;
        let mut camera = Self::new(config.camera_eye, config.camera_fov_y, 1.0);
        camera.znear = config.camera_near;
        camera.zfar = config.camera_far;
        camera.resize_projection(width, height);
        camera
    }

    /// Updates the aspect ratio; zero-sized windows are ignored
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }
}
