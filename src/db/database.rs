//! Blocking PostgreSQL lifecycle wrapper

use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use thiserror::Error;
use tracing::info;

use super::model::{CREATE_TABLES, DROP_TABLES, VillagerRecord};
use crate::app::config::DatabaseConfig;

/// Database the lifecycle operations connect to for administrative work
/// (creating and dropping the target database, which cannot be done from a
/// connection to the target itself)
const ADMIN_DATABASE: &str = "postgres";

/// Database layer errors
#[derive(Debug, Error)]
pub enum DbError {
    /// The server could not be reached or the database could not be
    /// created; fatal at startup
    #[error("database server unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A statement against an established connection failed
    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// An operation that needs an open pool ran before connect()
    #[error("not connected to the database")]
    NotConnected,

    /// The blocking runtime could not be started
    #[error("failed to start database runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Blocking facade over a single PostgreSQL connection
///
/// Owns a tokio runtime so the synchronous game loop can drive sqlx's async
/// operations to completion; every method blocks until the server replies.
pub struct Database {
    config: DatabaseConfig,
    rt: tokio::runtime::Runtime,
    pool: Option<PgPool>,
}

impl Database {
    /// Creates a database handle for the given configuration
    ///
    /// No connection is made until [`Database::ensure_database`] or
    /// [`Database::connect`] is called.
    pub fn new(config: DatabaseConfig) -> Result<Self, DbError> {
        let rt = tokio::runtime::Runtime::new().map_err(DbError::Runtime)?;
        Ok(Self {
            config,
            rt,
            pool: None,
        })
    }

    /// Returns the active configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Connection options for the configured target database
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
    }

    /// Connection options for the administrative database
    fn admin_options(&self) -> PgConnectOptions {
        self.connect_options().database(ADMIN_DATABASE)
    }

    /// Creates the configured database if it does not exist
    ///
    /// Idempotent: calling this against an existing database is a no-op.
    /// Any failure here means the server is unreachable or refuses us, which
    /// is fatal at startup.
    pub fn ensure_database(&self) -> Result<(), DbError> {
        self.rt.block_on(async {
            let mut conn = PgConnection::connect_with(&self.admin_options())
                .await
                .map_err(DbError::Unavailable)?;

            let exists: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)",
            )
            .bind(&self.config.database)
            .fetch_one(&mut conn)
            .await
            .map_err(DbError::Unavailable)?;

            if !exists {
                let stmt = format!("CREATE DATABASE {}", quote_ident(&self.config.database));
                sqlx::query(&stmt)
                    .execute(&mut conn)
                    .await
                    .map_err(DbError::Unavailable)?;
                info!(database = %self.config.database, "Created database");
            }

            conn.close().await.map_err(DbError::Unavailable)?;
            Ok(())
        })
    }

    /// Opens the connection to the configured database
    ///
    /// The pool is capped at one connection: the game is single-threaded and
    /// has a single writer.
    pub fn connect(&mut self) -> Result<(), DbError> {
        let pool = self.rt.block_on(async {
            PgPoolOptions::new()
                .max_connections(1)
                .connect_with(self.connect_options())
                .await
                .map_err(DbError::Unavailable)
        })?;

        info!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            "Connected to database"
        );
        self.pool = Some(pool);
        Ok(())
    }

    fn pool(&self) -> Result<&PgPool, DbError> {
        self.pool.as_ref().ok_or(DbError::NotConnected)
    }

    /// Creates all declared tables if absent (idempotent)
    pub fn create_tables(&self) -> Result<(), DbError> {
        let pool = self.pool()?;
        self.rt.block_on(async {
            for stmt in CREATE_TABLES {
                sqlx::query(stmt).execute(pool).await?;
            }
            Ok::<_, DbError>(())
        })?;
        info!("Schema ready");
        Ok(())
    }

    /// Inserts a new villager position row and returns its generated id
    ///
    /// Always inserts: repeated calls create distinct rows.
    pub fn insert_villager(&self, x: f64, y: f64) -> Result<i64, DbError> {
        let pool = self.pool()?;
        let id: i64 = self.rt.block_on(async {
            sqlx::query_scalar("INSERT INTO villagers (x, y) VALUES ($1, $2) RETURNING id")
                .bind(x)
                .bind(y)
                .fetch_one(pool)
                .await
        })?;
        info!(id, x, y, "Persisted villager position");
        Ok(id)
    }

    /// Fetches a villager position row by id
    pub fn fetch_villager(&self, id: i64) -> Result<VillagerRecord, DbError> {
        let pool = self.pool()?;
        let record = self.rt.block_on(async {
            sqlx::query_as::<_, VillagerRecord>("SELECT id, x, y FROM villagers WHERE id = $1")
                .bind(id)
                .fetch_one(pool)
                .await
        })?;
        Ok(record)
    }

    /// Inserts a user and returns the generated uuid
    pub fn add_user(&self, name: &str, email: &str) -> Result<String, DbError> {
        let pool = self.pool()?;
        let uuid: String = self.rt.block_on(async {
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING uuid::text")
                .bind(name)
                .bind(email)
                .fetch_one(pool)
                .await
        })?;
        Ok(uuid)
    }

    /// Inserts an empty building and returns its generated id
    pub fn add_building(&self) -> Result<i64, DbError> {
        let pool = self.pool()?;
        let id: i64 = self.rt.block_on(async {
            sqlx::query_scalar("INSERT INTO buildings DEFAULT VALUES RETURNING id")
                .fetch_one(pool)
                .await
        })?;
        Ok(id)
    }

    /// Drops all declared tables, leaving the database itself in place
    pub fn drop_tables(&self) -> Result<(), DbError> {
        let pool = self.pool()?;
        self.rt.block_on(async {
            for stmt in DROP_TABLES {
                sqlx::query(stmt).execute(pool).await?;
            }
            Ok::<_, DbError>(())
        })?;
        info!("Schema dropped");
        Ok(())
    }

    /// Drops the configured database
    ///
    /// The open pool is released first and the drop is issued from a
    /// connection to the administrative database; a database cannot drop
    /// itself while connected.
    pub fn drop_database(&mut self) -> Result<(), DbError> {
        self.disconnect();

        self.rt.block_on(async {
            let mut conn = PgConnection::connect_with(&self.admin_options())
                .await
                .map_err(DbError::Unavailable)?;

            let stmt = format!(
                "DROP DATABASE IF EXISTS {}",
                quote_ident(&self.config.database)
            );
            sqlx::query(&stmt).execute(&mut conn).await?;

            conn.close().await?;
            Ok::<_, DbError>(())
        })?;

        info!(database = %self.config.database, "Dropped database");
        Ok(())
    }

    /// Releases the connection
    pub fn disconnect(&mut self) {
        if let Some(pool) = self.pool.take() {
            self.rt.block_on(pool.close());
            info!("Disconnected from database");
        }
    }
}

/// Quote a SQL identifier; names cannot be bound as statement parameters
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("village_green"), "\"village_green\"");
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[test]
    fn test_operations_require_connection() {
        let db = Database::new(DatabaseConfig::default()).unwrap();
        assert!(matches!(
            db.insert_villager(1.0, 2.0),
            Err(DbError::NotConnected)
        ));
        assert!(matches!(db.create_tables(), Err(DbError::NotConnected)));
        assert!(matches!(db.drop_tables(), Err(DbError::NotConnected)));
    }
}
