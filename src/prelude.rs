//! # Room Viewer Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use roomview::prelude::*;
//!
//! let mut state = ViewerState::new(&ViewerConfig::default());
//! state.apply(Command::ToggleMotion3d);
//! state.tick();
//! assert!(state.bounds().effective(state.object_size()).contains(state.position));
//! ```

// Re-export core application types
pub use crate::app::RoomViewApp;
pub use crate::config::ViewerConfig;

// Re-export geometry and import
pub use crate::assets::{load_mesh, AssetError, MeshLoader};
pub use crate::gfx::geometry::{
    generate_cube, generate_room, generate_sphere, GeometryError, Mesh,
};

// Re-export simulation types
pub use crate::simulation::motion::{advance, Bounds, Step};
pub use crate::simulation::palette::Palette;
pub use crate::simulation::state::{Command, CommandOutcome, ObjectKind, ViewerState};

// Re-export common external dependencies
pub use cgmath::Vector3;
