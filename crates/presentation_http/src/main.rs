//! WindWatch HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{AlertSettingsService, QuerySession, WindQueryService};
use axum::http::{HeaderValue, Method};
use domain::LocationQuery;
use infrastructure::{
    AppConfig, GeminiOracleAdapter, SqliteSettingsStore, create_pool, init_tracing,
};
use presentation_http::{QueryOutcome, middleware::request_id, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_format = init_tracing(&config.server).context("Failed to initialize tracing")?;
    info!(?log_format, "Tracing initialized");
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }
    config.log_warnings();

    let pool = create_pool(&config.database).context("Failed to open settings database")?;
    let store = Arc::new(SqliteSettingsStore::new(Arc::new(pool)));
    let settings_service = AlertSettingsService::load(store)
        .await
        .context("Failed to load alert settings")?;

    let oracle = GeminiOracleAdapter::new(config.gemini.to_gemini_config())
        .context("Failed to initialize the wind oracle")?;
    let wind_service = WindQueryService::new(Arc::new(oracle))
        .with_illustrations(config.gemini.illustrations_enabled);

    let config = Arc::new(config);
    let state = AppState {
        wind_service: Arc::new(wind_service),
        settings_service: Arc::new(settings_service),
        session: Arc::new(QuerySession::new()),
        config: Arc::clone(&config),
    };

    if config.wind.startup_search {
        spawn_startup_search(state.clone(), &config.wind.default_location);
    }

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers(Any)
    };

    // Add middleware (last added = outermost)
    let app = app
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(axum::middleware::from_fn(request_id));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌬️ Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/api-docs/openapi.json", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Search the configured default location in the background
fn spawn_startup_search(state: AppState, location: &str) {
    let query = match LocationQuery::new(location) {
        Ok(query) => query,
        Err(e) => {
            warn!(error = %e, "Skipping startup search");
            return;
        },
    };

    tokio::spawn(async move {
        info!(query = %query, "Running startup search");
        match state.run_query(&query).await {
            QueryOutcome::Recorded(Ok(_)) => info!("Startup search finished"),
            QueryOutcome::Recorded(Err(e)) => warn!(error = %e, "Startup search failed"),
            QueryOutcome::Superseded => info!("Startup search superseded by a newer query"),
        }
    });
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
