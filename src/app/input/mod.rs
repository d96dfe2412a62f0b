//! Input handling system
//!
//! Collects raw winit keyboard events into a per-frame [`InputState`]
//! snapshot with edge detection. The main loop polls the snapshot once per
//! iteration and hands the held direction keys to the simulation.

mod collector;
mod state;

// Re-export public API
pub use collector::InputCollector;
pub use state::{ButtonState, InputState, KeyboardState};
