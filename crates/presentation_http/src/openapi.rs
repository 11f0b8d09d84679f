//! OpenAPI documentation for the WindWatch HTTP API

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for WindWatch
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WindWatch API",
        version = "0.1.0",
        description = "Live wind conditions, derived metrics and high-wind alerts for any location",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "wind", description = "Wind queries and the current view state"),
        (name = "settings", description = "High-wind alert settings")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::wind::search,
        handlers::wind::geolocation,
        handlers::wind::current_state,
        handlers::settings::get_alerts,
        handlers::settings::set_threshold,
        handlers::settings::toggle_alerts,
    ),
    components(
        schemas(
            // Health schemas
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ServiceStatus,
            // Wind schemas
            handlers::wind::SearchRequest,
            handlers::wind::GeolocationRequest,
            handlers::wind::GeolocationStatus,
            handlers::wind::WindStateResponse,
            handlers::wind::WindReportView,
            handlers::wind::ForecastPointView,
            handlers::wind::CitationView,
            handlers::wind::WindMetricsView,
            // Settings schemas
            handlers::settings::AlertSettingsResponse,
            handlers::settings::ThresholdRequest,
            // Error schemas
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
