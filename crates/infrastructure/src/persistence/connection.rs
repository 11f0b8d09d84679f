//! Settings database
//!
//! The alert settings live in a small SQLite file. Every pooled connection
//! is opened with the same pragmas, and the schema is migrated once when
//! the pool is created.

use std::{fs, io, path::Path};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::{debug, info};

use crate::{config::DatabaseConfig, persistence::migrations::run_migrations};

/// Path that selects a private in-memory database
const IN_MEMORY_PATH: &str = ":memory:";

/// Applied to each new connection; `busy_timeout` is per-connection in SQLite
const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL;
     PRAGMA synchronous = NORMAL;
     PRAGMA busy_timeout = 5000;";

/// Failures opening or migrating the settings database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cannot create settings directory: {0}")]
    Directory(#[from] io::Error),
}

/// Pool of connections to the settings database
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Open the settings database at `config.path` and migrate it
///
/// Missing parent directories are created. `":memory:"` gives every
/// connection its own empty database, so keep `max_connections` at 1 there.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Opening settings database");

    let manager = if config.path == IN_MEMORY_PATH {
        SqliteConnectionManager::memory()
    } else {
        let path = Path::new(&config.path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        SqliteConnectionManager::file(path)
    };
    let manager = manager.with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;
    run_migrations(&*pool.get()?)?;

    debug!("Settings database ready");
    Ok(pool)
}
