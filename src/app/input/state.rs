//! Raw input state

use crate::sim::HeldKeys;

/// Raw input state snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed this frame (edge)
    JustPressed,
    /// Held down (multiple frames)
    Pressed,
    /// Released this frame (edge)
    JustReleased,
}

impl ButtonState {
    /// Advance state for next frame (transitions edges to steady states)
    pub fn advance(self) -> Self {
        match self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            state => state,
        }
    }

    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Returns true if button was just pressed this frame
    pub fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Returns true if button was just released this frame
    pub fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }
}

/// Keyboard input state for the keys the game polls
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub up: ButtonState,
    pub down: ButtonState,
    pub left: ButtonState,
    pub right: ButtonState,
    pub escape: ButtonState,
}

impl KeyboardState {
    /// Snapshot of the held direction keys for the movement step
    pub fn held(&self) -> HeldKeys {
        HeldKeys {
            up: self.up.is_down(),
            down: self.down.is_down(),
            left: self.left.is_down(),
            right: self.right.is_down(),
        }
    }
}

impl InputState {
    /// Creates a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all button states for next frame
    pub fn advance_frame(&mut self) {
        self.keyboard.up = self.keyboard.up.advance();
        self.keyboard.down = self.keyboard.down.advance();
        self.keyboard.left = self.keyboard.left.advance();
        self.keyboard.right = self.keyboard.right.advance();
        self.keyboard.escape = self.keyboard.escape.advance();
    }
}
