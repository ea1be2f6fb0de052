// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles the depth buffer, uniform buffers, and bind groups for rendering.

pub mod draw_bindings;
pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use draw_bindings::{DrawBinding, DrawUniform};
pub use global_bindings::GlobalBindings;
pub use texture_resource::TextureResource;
