//! # Graphics Module
//!
//! Everything the viewer needs to put the room on screen: procedural and
//! imported geometry, the fixed camera, GPU resources, and the render engine.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - [`Mesh`] plus sphere, cube and room generators
//! - **Camera** ([`camera`]) - Fixed look-at camera
//! - **Rendering** ([`rendering`]) - Solid and wireframe pipelines over one shader
//! - **Scene** ([`scene`]) - Meshes uploaded to the GPU and their per-draw uniforms
//! - **Resources** ([`resources`]) - Depth buffer and uniform bind groups
//!
//! ```no_run
//! use roomview::{config::ViewerConfig, gfx::scene::Scene};
//!
//! let scene = Scene::from_config(&ViewerConfig::default()).unwrap();
//! assert!(scene.meshes().sphere.triangle_count() > 0);
//! ```
//!
//! [`Mesh`]: geometry::Mesh

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::FixedCamera;
pub use geometry::Mesh;
pub use rendering::render_engine::RenderEngine;
