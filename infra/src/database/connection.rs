//! Database connection pool management
//!
//! Provides the SQLite connection pool used by the key store, plus schema
//! initialization. Startup order matters: `init_schema` must complete before
//! the lifecycle service or any request handler touches the store.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use jwks_core::errors::{DomainError, DomainResult};
use jwks_shared::DatabaseConfig;

/// SQL creating the single key table
///
/// `kid` is `INTEGER PRIMARY KEY AUTOINCREMENT`, which makes SQLite assign
/// monotonically increasing identifiers and never reuse them, even after
/// deletions.
const CREATE_KEYS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS keys(
        kid INTEGER PRIMARY KEY AUTOINCREMENT,
        key BLOB NOT NULL,
        exp INTEGER NOT NULL
    )
"#;

/// Database connection pool wrapper
///
/// Manages the SQLite connection pool and owns schema initialization.
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// Creates the database file if it does not exist yet.
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - Connected pool
    /// * `Err(DomainError::Storage)` - The database could not be opened
    pub async fn new(config: &DatabaseConfig) -> DomainResult<Self> {
        tracing::info!(path = %config.path, "opening SQLite key store");

        let connect_options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to open database: {}", e),
            })?;

        Ok(Self { pool })
    }

    /// Create a pool over an in-memory database (tests)
    ///
    /// Limited to a single connection so every query sees the same
    /// in-memory database.
    pub async fn new_in_memory() -> DomainResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::new().in_memory(true))
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to open in-memory database: {}", e),
            })?;

        Ok(Self { pool })
    }

    /// Initialize the key table
    ///
    /// Idempotent; safe to call on every startup.
    pub async fn init_schema(&self) -> DomainResult<()> {
        sqlx::query(CREATE_KEYS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to initialize schema: {}", e),
            })?;

        tracing::debug!("key table ready");
        Ok(())
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> DomainResult<bool> {
        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("health check failed: {}", e),
            })?;

        Ok(row.0 == 1)
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
