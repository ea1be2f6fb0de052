//! Per-draw uniforms
//!
//! Every draw call in a frame gets its own [`DrawBinding`] so that the room
//! and the object can be recorded into the same render pass with different
//! model matrices and colors. Bound to slot 1.

use cgmath::{Matrix4, SquareMatrix};

use crate::{
    gfx::camera::camera_utils::convert_matrix4_to_array,
    wgpu_utils::{binding_types, uniform_slot::UniformSlot},
};

/// Uniform content for one draw call
///
/// MUST match `DrawUniform` in `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// Non-zero to draw with `color` instead of the vertex colors
    pub use_uniform_color: u32,
    _padding: [u32; 3],
}

impl DrawUniform {
    /// Draw using the colors stored in the vertices
    pub fn vertex_colored(model: Matrix4<f32>) -> Self {
        Self {
            model: convert_matrix4_to_array(model),
            color: [1.0, 1.0, 1.0, 1.0],
            use_uniform_color: 0,
            _padding: [0; 3],
        }
    }

    /// Draw every fragment with `color`
    pub fn uniform_colored(model: Matrix4<f32>, color: [f32; 4]) -> Self {
        Self {
            model: convert_matrix4_to_array(model),
            color,
            use_uniform_color: 1,
            _padding: [0; 3],
        }
    }
}

impl Default for DrawUniform {
    fn default() -> Self {
        Self::vertex_colored(Matrix4::identity())
    }
}

/// Creates the layout shared by all draw bindings
pub fn create_draw_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    binding_types::uniform_layout(
        device,
        wgpu::ShaderStages::VERTEX_FRAGMENT,
        "Draw Bind Group Layout",
    )
}

/// Uniform buffer and bind group for one draw call
pub struct DrawBinding {
    slot: UniformSlot<DrawUniform>,
}

impl DrawBinding {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        Self {
            slot: UniformSlot::new(device, layout, DrawUniform::default(), label),
        }
    }

    pub fn update(&mut self, queue: &wgpu::Queue, content: DrawUniform) {
        self.slot.write(queue, content);
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.slot.bind_group()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_layout_matches_wgsl() {
        // mat4x4 (64) + vec4 (16) + u32 padded to 16
        assert_eq!(std::mem::size_of::<DrawUniform>(), 96);
        assert_eq!(std::mem::size_of::<DrawUniform>() % 16, 0);
    }

    #[test]
    fn test_constructors() {
        let model = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let solid = DrawUniform::uniform_colored(model, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(solid.use_uniform_color, 1);
        assert_eq!(solid.model[3], [1.0, 2.0, 3.0, 1.0]);

        let colored = DrawUniform::vertex_colored(model);
        assert_eq!(colored.use_uniform_color, 0);
        assert_eq!(DrawUniform::default().model[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
