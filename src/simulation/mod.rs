// src/simulation/mod.rs
//! Simulation system
//!
//! The viewer's CPU-side state: the bounded motion integrator, the color
//! palette, and the mode state machine driven by [`state::Command`]s.

pub mod motion;
pub mod palette;
pub mod state;

// Re-export main types
pub use motion::{advance, Bounds, Step};
pub use palette::{NamedColor, Palette};
pub use state::{Command, CommandOutcome, ObjectKind, ViewerState};
