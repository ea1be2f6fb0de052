//! Render pass extensions for drawing uploaded meshes

use crate::gfx::scene::gpu_mesh::GpuMesh;

/// Bind group slot holding the per-draw uniforms
pub const DRAW_BIND_GROUP_SLOT: u32 = 1;

/// Extension trait for RenderPass to draw a [`GpuMesh`] with its per-draw uniforms
pub trait DrawMesh {
    fn draw_mesh(&mut self, mesh: &GpuMesh, draw_bind_group: &wgpu::BindGroup);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &GpuMesh, draw_bind_group: &wgpu::BindGroup) {
        self.set_bind_group(DRAW_BIND_GROUP_SLOT, draw_bind_group, &[]);
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
