//! Raw input collection from winit events

use super::state::{ButtonState, InputState};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects raw input from winit events and maintains InputState
pub struct InputCollector {
    state: InputState,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
        }
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event
            && let PhysicalKey::Code(code) = event.physical_key
        {
            self.apply_key(code, event.state, event.repeat);
        }
    }

    /// Fold a single key transition into the state
    pub fn apply_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        // OS key repeat would re-fire the JustPressed edge every repeat
        if repeat {
            return;
        }

        let button_state = match state {
            ElementState::Pressed => ButtonState::JustPressed,
            ElementState::Released => ButtonState::JustReleased,
        };

        match code {
            KeyCode::ArrowUp => self.state.keyboard.up = button_state,
            KeyCode::ArrowDown => self.state.keyboard.down = button_state,
            KeyCode::ArrowLeft => self.state.keyboard.left = button_state,
            KeyCode::ArrowRight => self.state.keyboard.right = button_state,
            KeyCode::Escape => self.state.keyboard.escape = button_state,
            _ => {}
        }
    }

    /// Advance to next frame (transitions edge states to steady states)
    pub fn advance_frame(&mut self) {
        self.state.advance_frame();
    }

    /// Get current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::HeldKeys;

    #[test]
    fn test_press_and_release_edges() {
        let mut collector = InputCollector::new();

        collector.apply_key(KeyCode::ArrowRight, ElementState::Pressed, false);
        assert!(collector.state().keyboard.right.is_just_pressed());
        assert_eq!(
            collector.state().keyboard.held(),
            HeldKeys {
                right: true,
                ..Default::default()
            }
        );

        collector.advance_frame();
        assert_eq!(collector.state().keyboard.right, ButtonState::Pressed);

        collector.apply_key(KeyCode::ArrowRight, ElementState::Released, false);
        assert!(collector.state().keyboard.right.is_just_released());
        assert_eq!(collector.state().keyboard.held(), HeldKeys::default());
    }

    #[test]
    fn test_repeat_does_not_refire_edge() {
        let mut collector = InputCollector::new();

        collector.apply_key(KeyCode::Escape, ElementState::Pressed, false);
        collector.advance_frame();
        collector.apply_key(KeyCode::Escape, ElementState::Pressed, true);
        assert_eq!(collector.state().keyboard.escape, ButtonState::Pressed);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut collector = InputCollector::new();
        collector.apply_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert_eq!(collector.state().keyboard.held(), HeldKeys::default());
        assert!(!collector.state().keyboard.escape.is_down());
    }
}
