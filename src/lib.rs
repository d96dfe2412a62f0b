//! Village Green
//!
//! A 2D game skeleton built with Rust, winit, and wgpu: a player-controlled
//! sprite on a fixed-camera field, with its starting position persisted to
//! PostgreSQL.

/// Game application - windowing, rendering, and input handling
pub mod app;

/// Build-time information (build timestamp, target, compiler version)
pub mod build_info;

/// Database lifecycle - schema creation, persistence, and teardown
pub mod db;

/// Health checks for application subsystems
pub mod health;

/// Game simulation - world state and sprites
pub mod sim;
