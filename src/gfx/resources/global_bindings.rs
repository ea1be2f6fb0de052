//! Global uniform bindings for camera data
//!
//! Holds the per-frame data shared by every draw in the scene. Bound to
//! slot 0 in all render pipelines.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_slot::UniformSlot},
};

/// Bind group layout and camera uniform for group 0
///
/// The uniform content MUST match `CameraUniform` in `scene.wgsl`.
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    camera: UniformSlot<CameraUniform>,
}

impl GlobalBindings {
    /// Creates the layout and an identity camera bound to it
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = binding_types::uniform_layout(
            device,
            wgpu::ShaderStages::VERTEX,
            "Globals Bind Group Layout",
        );
        let camera = UniformSlot::new(
            device,
            &bind_group_layout,
            CameraUniform::default(),
            "Global",
        );

        GlobalBindings {
            bind_group_layout,
            camera,
        }
    }

    /// Writes the latest camera matrix
    ///
    /// With a fixed camera this only uploads after a resize.
    pub fn update_camera(&mut self, queue: &wgpu::Queue, camera: CameraUniform) {
        self.camera.write(queue, camera);
    }

    /// Returns the bind group layout
    ///
    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.camera.bind_group()
    }
}
