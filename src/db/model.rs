//! Declared tables and row types
//!
//! The schema mirrors the village data model: villagers with a position and
//! (currently unused) wellbeing stats, the buildings they live and work in,
//! and registered users. The game itself only writes the villager position;
//! the remaining columns exist for the surrounding tooling.

use sqlx::FromRow;

/// CREATE TABLE statements in dependency order
pub(crate) const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS building_types (
        name TEXT PRIMARY KEY
    )",
    "CREATE TABLE IF NOT EXISTS buildings (
        id BIGSERIAL PRIMARY KEY
    )",
    "CREATE TABLE IF NOT EXISTS users (
        uuid UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS villagers (
        id BIGSERIAL PRIMARY KEY,
        x DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        y DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        hunger DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        tiredness DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        happiness DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        healthiness DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        house_id BIGINT REFERENCES buildings(id),
        work_id BIGINT REFERENCES buildings(id)
    )",
    "CREATE TABLE IF NOT EXISTS villager_tasks (
        id BIGSERIAL PRIMARY KEY,
        villager_id BIGINT NOT NULL REFERENCES villagers(id) ON DELETE CASCADE
    )",
];

/// DROP TABLE statements in reverse dependency order
pub(crate) const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS villager_tasks",
    "DROP TABLE IF EXISTS villagers",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS buildings",
    "DROP TABLE IF EXISTS building_types",
];

/// Persisted villager position row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VillagerRecord {
    /// Generated primary key
    pub id: i64,
    /// X coordinate in screen pixels
    pub x: f64,
    /// Y coordinate in screen pixels
    pub y: f64,
}
