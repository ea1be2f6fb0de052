//! Uniform buffers paired with their bind group
//!
//! Each slot owns one uniform value on the GPU, bound at binding 0 of a
//! single-entry layout. The last written value is kept on the CPU so frames
//! that change nothing skip the queue write.

use wgpu::util::DeviceExt;

use super::binding_types;

/// One uniform value, its buffer and its bind group
pub struct UniformSlot<T> {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    current: T,
}

impl<T: bytemuck::Pod + PartialEq> UniformSlot<T> {
    /// Uploads `initial` and binds it against `layout`
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        initial: T,
        label: &str,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Uniform Buffer", label)),
            contents: bytemuck::bytes_of(&initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = binding_types::single_bind_group(
            device,
            layout,
            buffer.as_entire_binding(),
            &format!("{} Bind Group", label),
        );

        Self {
            buffer,
            bind_group,
            current: initial,
        }
    }

    /// Writes `content` if it differs from what the GPU already holds
    pub fn write(&mut self, queue: &wgpu::Queue, content: T) {
        if replace_if_changed(&mut self.current, content) {
            queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.current));
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Stores `value` in `slot` and reports whether it changed
fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
