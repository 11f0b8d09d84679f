//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AlertSettingsService, ApplicationError, QuerySession, WindQueryService, WindQueryResult,
    error::WIND_DATA_UNAVAILABLE_MESSAGE,
};
use domain::LocationQuery;
use infrastructure::AppConfig;
use tracing::error;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Three-stage wind query orchestration
    pub wind_service: Arc<WindQueryService>,
    /// Persisted alert threshold and toggle
    pub settings_service: Arc<AlertSettingsService>,
    /// The query currently shown to clients
    pub session: Arc<QuerySession>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

/// What happened to a query that was run through the session
#[derive(Debug)]
pub enum QueryOutcome {
    /// The result was recorded in the session
    Recorded(Result<WindQueryResult, ApplicationError>),
    /// A newer query started before this one finished; nothing was recorded
    Superseded,
}

impl AppState {
    /// Run a wind query and record its result in the session
    ///
    /// The session enters the loading phase immediately. A result only lands
    /// if no newer query or geolocation failure was recorded meanwhile.
    ///
    /// Resolution runs on its own task, so the session is completed even when
    /// the caller stops waiting (for example a disconnected HTTP client).
    pub async fn run_query(&self, query: &LocationQuery) -> QueryOutcome {
        let ticket = self.session.begin(query);

        let wind_service = Arc::clone(&self.wind_service);
        let session = Arc::clone(&self.session);
        let query = query.clone();
        let task = tokio::spawn(async move {
            let outcome = wind_service.resolve(&query).await;
            let recorded =
                session.complete(ticket, outcome.as_ref().cloned().map_err(ToString::to_string));
            (recorded, outcome)
        });

        match task.await {
            Ok((true, outcome)) => QueryOutcome::Recorded(outcome),
            Ok((false, _)) => QueryOutcome::Superseded,
            Err(e) => {
                error!(error = %e, "Wind query task failed");
                if self
                    .session
                    .complete(ticket, Err(WIND_DATA_UNAVAILABLE_MESSAGE.to_string()))
                {
                    QueryOutcome::Recorded(Err(ApplicationError::Internal(e.to_string())))
                } else {
                    QueryOutcome::Superseded
                }
            },
        }
    }
}
