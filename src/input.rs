//! Input mapping
//!
//! Translates winit keyboard and mouse events into [`Command`]s. Key repeats
//! count as presses, so holding `C` keeps cycling colors.

use winit::{
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::simulation::state::Command;

/// Controls printed for the help command
pub const HELP_TEXT: &str = "\
CONTROLS:
  c                 - Change the color of the current object
  m                 - Toggle wireframe (lines) or solid mode
  Left Mouse Click  - Change the type of the object (sphere, cube or imported mesh)
  i                 - Move the object to the top-left corner of the room
  h                 - Display this help message
  d                 - Toggle 3D movement (on / off)
  q, Esc            - Quit the program";

/// Command bound to a physical key
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::KeyC => Some(Command::CycleColor),
        KeyCode::KeyH => Some(Command::ShowHelp),
        KeyCode::KeyI => Some(Command::ResetToCorner),
        KeyCode::KeyM => Some(Command::ToggleWireframe),
        KeyCode::KeyD => Some(Command::ToggleMotion3d),
        KeyCode::KeyQ | KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Command bound to a mouse button press
pub fn command_for_mouse(button: MouseButton) -> Option<Command> {
    match button {
        MouseButton::Left => Some(Command::CycleObjectKind),
        _ => None,
    }
}

/// Command for a keyboard event, if it is a press (or repeat) of a bound key
pub fn command_for_key_event(event: &KeyEvent) -> Option<Command> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => command_for_key(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Command for any window event the viewer reacts to
pub fn command_for_window_event(event: &WindowEvent) -> Option<Command> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => command_for_key_event(event),
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button,
            ..
        } => command_for_mouse(*button),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(KeyCode::KeyC), Some(Command::CycleColor));
        assert_eq!(command_for_key(KeyCode::KeyH), Some(Command::ShowHelp));
        assert_eq!(command_for_key(KeyCode::KeyI), Some(Command::ResetToCorner));
        assert_eq!(command_for_key(KeyCode::KeyM), Some(Command::ToggleWireframe));
        assert_eq!(command_for_key(KeyCode::KeyD), Some(Command::ToggleMotion3d));
        assert_eq!(command_for_key(KeyCode::KeyQ), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Escape), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::KeyX), None);
    }

    #[test]
    fn test_mouse_bindings() {
        assert_eq!(
            command_for_mouse(MouseButton::Left),
            Some(Command::CycleObjectKind)
        );
        assert_eq!(command_for_mouse(MouseButton::Right), None);
    }

    #[test]
    fn test_help_lists_every_key() {
        for key in ["c ", "m ", "i ", "h ", "d ", "q, Esc", "Left Mouse Click"] {
            assert!(HELP_TEXT.contains(key), "help text is missing {:?}", key);
        }
    }
}
