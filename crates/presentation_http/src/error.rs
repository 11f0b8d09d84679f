//! API error handling
//!
//! Maps application failures onto HTTP responses. Oracle and extraction
//! failures always surface as the same user-facing message; internal
//! details only reach the log.

use application::{ApplicationError, error::WIND_DATA_UNAVAILABLE_MESSAGE};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{}", WIND_DATA_UNAVAILABLE_MESSAGE)]
    WindDataUnavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details, such as per-field validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::WindDataUnavailable => (
                StatusCode::BAD_GATEWAY,
                "wind_data_unavailable",
                WIND_DATA_UNAVAILABLE_MESSAGE.to_string(),
            ),
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Oracle(_)
            | ApplicationError::Extraction(_)
            | ApplicationError::WindDataUnavailable => Self::WindDataUnavailable,
            ApplicationError::Persistence(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
