//! Scene and mode state
//!
//! [`ViewerState`] owns everything that changes while the viewer runs: the
//! object's position and velocity and the display modes. Input never touches
//! these fields directly; it is translated into [`Command`]s and applied
//! through [`ViewerState::apply`].

use cgmath::Vector3;
use log::debug;

use super::{
    motion::{self, Bounds},
    palette::Palette,
};
use crate::config::ViewerConfig;

/// Which mesh stands in for the bouncing object
///
/// The discriminants give the cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectKind {
    Cube = 0,
    #[default]
    Sphere = 1,
    ImportedMesh = 2,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::Cube,
        ObjectKind::Sphere,
        ObjectKind::ImportedMesh,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The kind after this one, wrapping around
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Cube => "cube",
            ObjectKind::Sphere => "sphere",
            ObjectKind::ImportedMesh => "imported mesh",
        }
    }
}

/// Requests that can be applied to the viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CycleColor,
    CycleObjectKind,
    ToggleWireframe,
    ToggleMotion3d,
    ResetToCorner,
    ShowHelp,
    Quit,
}

/// What the host has to do after a command was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed (or nothing to do); keep running
    Continue,
    /// Print the controls
    ShowHelp,
    /// Leave the event loop
    Exit,
}

/// Mutable state of the viewer
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    object_kind: ObjectKind,
    color_index: usize,
    wireframe: bool,
    motion_3d: bool,

    bounds: Bounds,
    object_size: f32,
    z_speed: f32,
    palette: Palette,
}

impl ViewerState {
    /// Builds the initial state and parks the object in the top-left corner
    pub fn new(config: &ViewerConfig) -> Self {
        let mut state = Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            velocity: config.initial_velocity,
            object_kind: ObjectKind::default(),
            color_index: 0,
            wireframe: false,
            motion_3d: false,
            bounds: config.bounds,
            object_size: config.object_size,
            z_speed: config.z_speed,
            palette: Palette::default(),
        };
        state.reset_to_corner(config.bounds, config.object_size);
        state
    }

    /// Applies one command
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        debug!("Applying {:?}", command);
        match command {
            Command::CycleColor => self.cycle_color(),
            Command::CycleObjectKind => self.cycle_object_kind(),
            Command::ToggleWireframe => self.toggle_wireframe(),
            Command::ToggleMotion3d => self.toggle_motion_3d(),
            Command::ResetToCorner => self.reset_to_corner(self.bounds, self.object_size),
            Command::ShowHelp => return CommandOutcome::ShowHelp,
            Command::Quit => return CommandOutcome::Exit,
        }
        CommandOutcome::Continue
    }

    /// Advances the object by one frame inside the room
    pub fn tick(&mut self) {
        let step = motion::advance(self.position, self.velocity, &self.bounds, self.object_size);
        self.position = step.position;
        self.velocity = step.velocity;
    }

    pub fn cycle_color(&mut self) {
        self.color_index = self.palette.next_index(self.color_index);
    }

    pub fn cycle_object_kind(&mut self) {
        self.object_kind = self.object_kind.next();
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    /// Flips 3D motion and sets the Z velocity to match; X and Y are kept
    pub fn toggle_motion_3d(&mut self) {
        self.motion_3d = !self.motion_3d;
        self.velocity.z = if self.motion_3d { self.z_speed } else { 0.0 };
    }

    /// Moves the object to the top-left-back corner of `bounds`
    pub fn reset_to_corner(&mut self, bounds: Bounds, object_size: f32) {
        self.position = Vector3::new(bounds.min.x, bounds.max.y - object_size, bounds.min.z);
    }

    pub fn object_kind(&self) -> ObjectKind {
        self.object_kind
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// The current palette entry as RGBA
    pub fn color(&self) -> [f32; 4] {
        self.palette.rgba(self.color_index)
    }

    pub fn color_name(&self) -> &'static str {
        self.palette.name(self.color_index)
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn motion_3d(&self) -> bool {
        self.motion_3d
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn object_size(&self) -> f32 {
        self.object_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewerState {
        ViewerState::new(&ViewerConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.object_kind(), ObjectKind::Sphere);
        assert_eq!(state.color_index(), 0);
        assert_eq!(state.color_name(), "red");
        assert!(!state.wireframe());
        assert!(!state.motion_3d());
        assert_eq!(state.position, Vector3::new(-4.0, 3.0, -4.0));
        assert_eq!(state.velocity, Vector3::new(0.12, 0.08, 0.0));
    }

    #[test]
    fn test_color_wraps_after_full_cycle() {
        let mut state = state();
        state.cycle_color();
        state.cycle_color();
        let start = state.color_index();
        for _ in 0..state.palette().len() {
            state.cycle_color();
        }
        assert_eq!(state.color_index(), start);
    }

    #[test]
    fn test_object_kind_cycle() {
        let mut state = state();
        state.cycle_object_kind();
        assert_eq!(state.object_kind(), ObjectKind::ImportedMesh);
        state.cycle_object_kind();
        assert_eq!(state.object_kind(), ObjectKind::Cube);
        state.cycle_object_kind();
        assert_eq!(state.object_kind(), ObjectKind::Sphere);
    }

    #[test]
    fn test_toggle_motion_3d() {
        let mut state = state();
        state.velocity = Vector3::new(-0.12, 0.08, 0.0);

        state.toggle_motion_3d();
        assert!(state.motion_3d());
        assert_eq!(state.velocity, Vector3::new(-0.12, 0.08, -0.1));

        state.toggle_motion_3d();
        assert!(!state.motion_3d());
        assert_eq!(state.velocity, Vector3::new(-0.12, 0.08, 0.0));
    }

    #[test]
    fn test_reset_to_corner() {
        let mut state = state();
        state.position = Vector3::new(1.0, 1.0, 1.0);
        state.reset_to_corner(Bounds::cube(4.0), 1.0);
        assert_eq!(state.position, Vector3::new(-4.0, 3.0, -4.0));
    }

    #[test]
    fn test_apply_dispatch() {
        let mut state = state();
        assert_eq!(state.apply(Command::ToggleWireframe), CommandOutcome::Continue);
        assert!(state.wireframe());
        assert_eq!(state.apply(Command::CycleColor), CommandOutcome::Continue);
        assert_eq!(state.color_name(), "green");
        assert_eq!(state.apply(Command::CycleObjectKind), CommandOutcome::Continue);
        assert_eq!(state.object_kind(), ObjectKind::ImportedMesh);

        state.position = Vector3::new(0.0, 0.0, 0.0);
        assert_eq!(state.apply(Command::ResetToCorner), CommandOutcome::Continue);
        assert_eq!(state.position, Vector3::new(-4.0, 3.0, -4.0));

        assert_eq!(state.apply(Command::ShowHelp), CommandOutcome::ShowHelp);
        assert_eq!(state.apply(Command::Quit), CommandOutcome::Exit);
    }

    #[test]
    fn test_tick_stays_in_room() {
        let mut state = state();
        state.toggle_motion_3d();
        let limits = state.bounds().effective(state.object_size());
        for _ in 0..10_000 {
            state.tick();
            assert!(limits.contains(state.position));
        }
    }

    #[test]
    fn test_first_ticks_from_corner() {
        // The corner lies outside the inset box, so the first ticks snap back
        let mut state = state();
        state.tick();
        assert_eq!(state.position.x, -3.25);
        assert_eq!(state.position.z, -3.25);
        assert_eq!(state.velocity.x, -0.12);
    }
}
