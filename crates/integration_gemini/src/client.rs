//! Gemini HTTP client
//!
//! Sends `generateContent` requests authenticated with an API key header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::GeminiError,
    models::{GenerateContentRequest, GenerateContentResponse},
};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL (default: <https://generativelanguage.googleapis.com/v1beta>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Model for the grounded narrative (default: gemini-3-flash-preview)
    #[serde(default = "default_text_model")]
    pub narrative_model: String,

    /// Model for JSON extraction (default: gemini-3-flash-preview)
    #[serde(default = "default_text_model")]
    pub extraction_model: String,

    /// Model for the illustration (default: gemini-2.5-flash-image)
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Request timeout in seconds (default: 60)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("narrative_model", &self.narrative_model)
            .field("extraction_model", &self.extraction_model)
            .field("image_model", &self.image_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

const fn default_timeout() -> u64 {
    60
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            narrative_model: default_text_model(),
            extraction_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Gemini client trait
#[async_trait]
pub trait GeminiClient: Send + Sync {
    /// Run one `generateContent` call against the given model
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;

    /// Check if the API answers with the configured key
    async fn is_healthy(&self) -> bool;
}

/// reqwest-based Gemini client
#[derive(Debug)]
pub struct HttpGeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl HttpGeminiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be initialized.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::AuthenticationFailed(
                "Gemini API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    fn map_send_error(&self, e: &reqwest::Error) -> GeminiError {
        if e.is_timeout() {
            GeminiError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            GeminiError::ConnectionFailed(e.to_string())
        } else {
            GeminiError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl GeminiClient for HttpGeminiClient {
    #[instrument(skip(self, request))]
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.generate_url(model);
        debug!(url = %url, grounded = !request.tools.is_empty(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        debug!(status = %status, "Received generateContent response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimitExceeded);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GeminiError::AuthenticationFailed(format!("HTTP {status}")));
        }
        if status.is_server_error() {
            return Err(GeminiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))?;

        if body.candidates.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(body)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/models", self.config.base_url.trim_end_matches('/'));
        match self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "Gemini health check failed");
                false
            },
        }
    }
}
