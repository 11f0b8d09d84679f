//! Request correlation
//!
//! Every request runs inside an `http_request` span carrying a request id.
//! A valid UUID in the incoming `X-Request-Id` header is reused, otherwise a
//! time-ordered v7 id is generated. The id is echoed back on the response.

use std::fmt;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID extracted from the request headers or generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn from_request(request: &Request) -> Self {
        let id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::now_v7);
        Self(id)
    }

    /// Get the request ID as a UUID
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware function; install with `axum::middleware::from_fn(request_id)`
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId::from_request(&request);
    request.extensions_mut().insert(id);

    let span = tracing::info_span!(
        "http_request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, body::Body, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn echo(Extension(id): Extension<RequestId>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/echo", get(echo))
            .layer(axum::middleware::from_fn(request_id))
    }

    #[tokio::test]
    async fn generates_id_when_missing() {
        let response = app()
            .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
        let id = Uuid::parse_str(header.to_str().unwrap()).unwrap();
        assert_eq!(id.get_version_num(), 7);
    }

    #[tokio::test]
    async fn reuses_valid_incoming_id() {
        let incoming = Uuid::new_v4();
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/echo")
                    .header("x-request-id", incoming.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert_eq!(header.to_str().unwrap(), incoming.to_string());
    }

    #[tokio::test]
    async fn replaces_malformed_incoming_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/echo")
                    .header("x-request-id", "not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert_ne!(header.to_str().unwrap(), "not-a-uuid");
    }

    #[test]
    fn request_id_display() {
        let id = RequestId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.as_uuid(), Uuid::nil());
    }
}
