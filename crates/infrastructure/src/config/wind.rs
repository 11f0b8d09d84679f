//! Wind query defaults.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Wind query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindConfig {
    /// Location searched when the app starts
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Whether to search `default_location` at startup (default: true)
    #[serde(default = "default_true")]
    pub startup_search: bool,
}

fn default_location() -> String {
    "Bratislava".to_string()
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            startup_search: true,
        }
    }
}
