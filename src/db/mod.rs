//! Database lifecycle module
//!
//! Wraps a PostgreSQL connection behind a blocking facade: the game is a
//! single-threaded polling loop, so every operation drives its future to
//! completion on an owned tokio runtime and blocks the caller.
//!
//! Lifecycle: [`Database::ensure_database`] and [`Database::create_tables`]
//! run at startup (both idempotent), [`Database::insert_villager`] persists
//! the player's starting position once, and schema teardown
//! ([`Database::drop_tables`], [`Database::drop_database`]) only happens via
//! an explicit cleanup call, never at game exit.

mod database;
mod model;

pub use database::{Database, DbError};
pub use model::VillagerRecord;
