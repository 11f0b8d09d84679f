//! Request validation
//!
//! `ValidatedJson` deserializes a body and runs its `validator` rules before
//! the handler sees it. Rejections use the same body shape as `ApiError`.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ErrorResponse;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::JsonError(e) => ErrorResponse {
                error: e.body_text(),
                code: "invalid_json".to_string(),
                details: None,
            },
            Self::ValidationFailed(details) => ErrorResponse {
                error: "Validation failed".to_string(),
                code: "validation_error".to_string(),
                details: Some(details),
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// A JSON extractor that also validates the request body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(describe(&e)))?;
        Ok(Self(value))
    }
}

/// Flatten field errors into `field: message` lines, sorted by field
fn describe(errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    lines.sort();
    lines
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        routing::put,
    };
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct ThresholdBody {
        #[validate(range(min = 10, max = 150, message = "must be between 10 and 150"))]
        threshold: u32,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<ThresholdBody>) -> String {
        body.threshold.to_string()
    }

    async fn send(json: &'static str) -> Response {
        Router::new()
            .route("/threshold", put(handler))
            .oneshot(
                axum::http::Request::builder()
                    .method("PUT")
                    .uri("/threshold")
                    .header("content-type", "application/json")
                    .body(Body::from(json))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_request_passes() {
        let response = send(r#"{"threshold": 95}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_rejected_with_details() {
        let response = send(r#"{"threshold": 200}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "validation_error");
        assert_eq!(body["details"][0], "threshold: must be between 10 and 150");
    }

    #[tokio::test]
    async fn invalid_json_rejected() {
        let response = send(r#"{"threshold": not json}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "invalid_json");
    }

    #[tokio::test]
    async fn wrong_type_rejected() {
        let response = send(r#"{"threshold": "high"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_message_joins_details() {
        let error = ValidationError::ValidationFailed(vec!["a: x".to_string(), "b: y".to_string()]);
        assert_eq!(error.to_string(), "Validation failed: a: x; b: y");
    }
}
