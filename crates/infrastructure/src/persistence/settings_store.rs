//! SQLite settings store implementation
//!
//! Implements the `SettingsStore` port on a single key-value table.

use std::sync::Arc;

use application::{error::ApplicationError, ports::SettingsStore};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based settings store
#[derive(Debug, Clone)]
pub struct SqliteSettingsStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteSettingsStore {
    /// Create a new SQLite settings store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn persistence_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Persistence(e.to_string())
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(persistence_error)?;

            let value = conn
                .query_row(
                    "SELECT value FROM settings WHERE key = ?1",
                    [&key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
                .map_err(persistence_error)?;

            debug!(found = value.is_some(), "Read setting");
            Ok(value)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();
        let value = value.to_string();
        let now = Utc::now().to_rfc3339();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(persistence_error)?;

            conn.execute(
                "INSERT INTO settings (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(persistence_error)?;

            debug!("Wrote setting");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
