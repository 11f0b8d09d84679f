//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `gemini`: Oracle endpoint, key and models
//! - `database`: SQLite settings store
//! - `wind`: Query defaults

mod database;
mod gemini;
mod server;
mod wind;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use database::DatabaseConfig;
pub use gemini::GeminiAppConfig;
pub use server::ServerConfig;
pub use wind::WindConfig;

/// Environment variable prefix, e.g. `WINDWATCH_SERVER__PORT`
pub const ENV_PREFIX: &str = "WINDWATCH";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini configuration
    #[serde(default)]
    pub gemini: GeminiAppConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Wind query defaults
    #[serde(default)]
    pub wind: WindConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (any format `config` supports)
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("wind.default_location", "Bratislava")?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., WINDWATCH_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Collect configuration problems that do not prevent startup
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.gemini.has_api_key() {
            warnings.push(format!(
                "gemini.api_key is not set; wind queries will fail (set {ENV_PREFIX}_GEMINI__API_KEY)"
            ));
        }
        if self.wind.default_location.trim().is_empty() && self.wind.startup_search {
            warnings.push("wind.default_location is empty; startup search is skipped".to_string());
        }
        if self.database.path == ":memory:" && self.database.max_connections > 1 {
            warnings.push(
                "database.path is :memory: with several connections; settings will not be shared"
                    .to_string(),
            );
        }

        warnings
    }

    /// Log every entry of [`AppConfig::warnings`]
    pub fn log_warnings(&self) {
        for warning in self.warnings() {
            warn!("{warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::SecretString;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, "text");
        assert_eq!(config.server.shutdown_timeout_secs, 30);
        assert_eq!(config.gemini.narrative_model, "gemini-3-flash-preview");
        assert_eq!(config.gemini.image_model, "gemini-2.5-flash-image");
        assert!(config.gemini.illustrations_enabled);
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.database.path, "windwatch.db");
        assert_eq!(config.wind.default_location, "Bratislava");
        assert!(config.wind.startup_search);
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8080
log_format = "json"

[gemini]
api_key = "from-file"
illustrations_enabled = false

[wind]
default_location = "Vienna"
"#
        )
        .unwrap();

        let stem = file.path().with_extension("");
        let stem = stem.to_string_lossy();
        let config = AppConfig::load_from(&stem).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, "json");
        assert!(config.gemini.has_api_key());
        assert!(!config.gemini.illustrations_enabled);
        assert_eq!(config.wind.default_location, "Vienna");
        assert_eq!(config.database.path, "windwatch.db");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from("/nonexistent/windwatch-config").unwrap();
        assert_eq!(config.wind.default_location, "Bratislava");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn api_key_is_redacted_and_not_serialized() {
        let mut config = AppConfig::default();
        config.gemini.api_key = Some(SecretString::from("super-secret"));

        assert!(!format!("{config:?}").contains("super-secret"));
        assert!(!serde_json::to_string(&config).unwrap().contains("super-secret"));
        assert_eq!(config.gemini.to_gemini_config().api_key, "super-secret");
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut config = AppConfig::default();
        config.gemini.api_key = Some(SecretString::from("   "));
        assert!(!config.gemini.has_api_key());
    }

    #[test]
    fn warnings_for_missing_key() {
        let config = AppConfig::default();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("WINDWATCH_GEMINI__API_KEY"));
    }

    #[test]
    fn no_warnings_when_configured() {
        let mut config = AppConfig::default();
        config.gemini.api_key = Some(SecretString::from("key"));
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn gemini_config_conversion() {
        let mut config = GeminiAppConfig::default();
        config.base_url = "http://localhost:1234".to_string();
        config.timeout_secs = 5;

        let converted = config.to_gemini_config();
        assert_eq!(converted.base_url, "http://localhost:1234");
        assert_eq!(converted.timeout_secs, 5);
        assert!(converted.api_key.is_empty());
    }
}
