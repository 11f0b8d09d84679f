//! Tracing subscriber setup
//!
//! Console logging in either human-readable or JSON form. `RUST_LOG`
//! overrides the configured filter when set.

use std::str::FromStr;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Invalid log format: {other}. Use 'text' or 'json'")),
        }
    }
}

/// Install the global tracing subscriber
///
/// An unknown `log_format` falls back to text output.
pub fn init_tracing(config: &ServerConfig) -> Result<LogFormat, TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let format = config.log_format.parse().unwrap_or_default();

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = ?format, filter = %config.log_filter, "Tracing initialized");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn second_init_fails() {
        let config = ServerConfig::default();
        let _ = init_tracing(&config);

        assert!(matches!(init_tracing(&config), Err(TelemetryError::Init(_))));
    }
}
