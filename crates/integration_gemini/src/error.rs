//! Gemini client error types

use thiserror::Error;

/// Errors returned by the Gemini client
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was rejected or could not be sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key missing or rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// The model returned no candidate at all
    #[error("Empty response from model")]
    EmptyResponse,
}
