// src/lib.rs
//! Room Viewer
//!
//! An interactive 3D viewer built on wgpu and winit: a sphere, cube or
//! imported mesh bounces inside a colored room. Keys change the object's
//! color, shape, motion, and the polygon mode.
//!
//! The simulation side ([`simulation`], [`gfx::geometry`]) is plain data and
//! can be used without a window.

pub mod app;
pub mod assets;
pub mod config;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod simulation;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::RoomViewApp;
pub use config::ViewerConfig;

/// Creates a viewer with the default configuration
pub fn default() -> anyhow::Result<RoomViewApp> {
    RoomViewApp::new(ViewerConfig::default())
}
