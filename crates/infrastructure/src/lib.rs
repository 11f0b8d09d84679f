//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Gemini wind
//! oracle, SQLite and in-memory settings stores, configuration loading and
//! tracing setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DatabaseConfig, GeminiAppConfig, ServerConfig, WindConfig};
pub use persistence::{ConnectionPool, SqliteSettingsStore, create_pool};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
