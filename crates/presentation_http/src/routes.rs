//! Route definitions

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Wind API (v1)
        .route("/v1/wind/search", post(handlers::wind::search))
        .route("/v1/wind/geolocation", post(handlers::wind::geolocation))
        .route("/v1/wind/state", get(handlers::wind::current_state))
        // Settings API (v1)
        .route("/v1/settings/alerts", get(handlers::settings::get_alerts))
        .route(
            "/v1/settings/alerts/threshold",
            put(handlers::settings::set_threshold),
        )
        .route(
            "/v1/settings/alerts/toggle",
            post(handlers::settings::toggle_alerts),
        )
        // API documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        // Attach state
        .with_state(state)
}
