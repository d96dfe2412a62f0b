//! Full database lifecycle integration test
//!
//! Requires a running PostgreSQL server reachable with the configured
//! credentials (APP_DATABASE__* environment variables or config profiles),
//! so it is ignored by default:
//!
//! ```text
//! cargo test --test db_lifecycle -- --ignored
//! ```

use village_green::app::{AppConfig, DatabaseConfig};
use village_green::db::Database;

fn test_config() -> DatabaseConfig {
    let mut config = AppConfig::load_from_env()
        .map(|c| c.database)
        .unwrap_or_default();
    // Keep the throwaway database away from any real one
    config.database = format!("{}_lifecycle_test", config.database);
    config
}

#[test]
#[ignore = "requires a running PostgreSQL server"]
fn test_full_lifecycle() {
    let mut db = Database::new(test_config()).unwrap();

    // Idempotent: the second call finds the database already present
    db.ensure_database().unwrap();
    db.ensure_database().unwrap();

    db.connect().unwrap();

    // Idempotent: CREATE TABLE IF NOT EXISTS twice neither errors nor
    // duplicates anything
    db.create_tables().unwrap();
    db.create_tables().unwrap();

    // Persist a position and read it back
    let id = db.insert_villager(368.0, 268.0).unwrap();
    let record = db.fetch_villager(id).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.x, 368.0);
    assert_eq!(record.y, 268.0);

    // Repeated persists create distinct rows
    let second = db.insert_villager(368.0, 268.0).unwrap();
    assert_ne!(id, second);

    // Supplemental records
    let uuid = db.add_user("scvannost", "scvannost@example.com").unwrap();
    assert!(!uuid.is_empty());
    let building = db.add_building().unwrap();
    assert!(building > 0);

    // Explicit teardown: drop the schema, then the database itself
    db.drop_tables().unwrap();
    db.drop_database().unwrap();
    db.disconnect();
}
