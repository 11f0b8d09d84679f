//! Persistence module
//!
//! SQLite-based storage for user settings.

pub mod connection;
pub mod migrations;
pub mod settings_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use settings_store::SqliteSettingsStore;
