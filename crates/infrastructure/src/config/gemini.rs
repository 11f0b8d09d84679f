//! Gemini oracle configuration.

use integration_gemini::GeminiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Gemini configuration as read from file and environment
///
/// Missing fields take the client's own defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiAppConfig {
    /// API base URL
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Model answering the grounded wind question
    pub narrative_model: String,

    /// Model turning the narrative into JSON
    pub extraction_model: String,

    /// Model drawing the illustration
    pub image_model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to request an illustration for each report (default: true)
    pub illustrations_enabled: bool,
}

impl std::fmt::Debug for GeminiAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("narrative_model", &self.narrative_model)
            .field("extraction_model", &self.extraction_model)
            .field("image_model", &self.image_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("illustrations_enabled", &self.illustrations_enabled)
            .finish()
    }
}

impl Default for GeminiAppConfig {
    fn default() -> Self {
        let GeminiConfig {
            base_url,
            narrative_model,
            extraction_model,
            image_model,
            timeout_secs,
            ..
        } = GeminiConfig::default();

        Self {
            base_url,
            api_key: None,
            narrative_model,
            extraction_model,
            image_model,
            timeout_secs,
            illustrations_enabled: true,
        }
    }
}

impl GeminiAppConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to `integration_gemini`'s `GeminiConfig`
    #[must_use]
    pub fn to_gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default(),
            narrative_model: self.narrative_model.clone(),
            extraction_model: self.extraction_model.clone(),
            image_model: self.image_model.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
