//! Game application module
//!
//! Handles windowing, rendering, and user input.

pub mod config;
pub mod input;
pub mod renderer;
mod runner;
mod window;

pub use config::{AppConfig, DatabaseConfig, GameConfig, WindowConfig};
pub use runner::{App, RunState};
pub use window::window_attributes_from_config;
