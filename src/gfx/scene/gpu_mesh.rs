//! GPU-resident meshes

use wgpu::util::DeviceExt;

use crate::gfx::geometry::Mesh;

/// Vertex and index buffers for one [`Mesh`], uploaded once
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Uploads `mesh`, or returns `None` when it has no triangles to draw
    pub fn new(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Option<Self> {
        if mesh.triangle_count() == 0 {
            log::warn!("Mesh '{}' has no triangles, skipping upload", label);
            return None;
        }

        let (vertices, indices) = mesh.to_scene_format();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        })
    }
}
