//! # Scene Management Module
//!
//! Holds what the viewer draws each frame: the room, the three object meshes,
//! and the per-draw uniforms that place and color them.
//!
//! - [`Scene`] - meshes plus their GPU resources
//! - [`SceneMeshes`] - CPU-side meshes built at startup
//! - [`ObjectTransforms`] - per-kind model matrices
//! - [`Vertex3D`] - GPU vertex format

pub mod gpu_mesh;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use gpu_mesh::GpuMesh;
pub use scene::{ObjectTransforms, Scene, SceneMeshes};
pub use vertex::Vertex3D;
