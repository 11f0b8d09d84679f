//! Query session - The view state behind the wind screen
//!
//! Tracks the lifecycle of the most recent query. Every query start hands
//! out a [`RequestTicket`]; only the latest ticket may write a result, so a
//! slow answer to an older query can never overwrite a newer one.

use domain::{Citation, LocationQuery, WindReport};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::wind_query_service::WindQueryResult;

/// Message shown when the device location could not be obtained
pub const GEOLOCATION_DENIED_MESSAGE: &str =
    "Could not determine your location. Please enter it manually.";

/// Lifecycle phase of the current query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryPhase {
    /// Nothing has been asked yet
    #[default]
    Idle,
    /// A query is in flight
    Loading,
    /// The last query produced a report
    Loaded,
    /// The last query failed
    Errored,
}

/// Handle identifying one started query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Sequence number of this ticket
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Point-in-time copy of the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySnapshot {
    pub phase: QueryPhase,
    pub query: Option<LocationQuery>,
    pub report: Option<WindReport>,
    pub citations: Vec<Citation>,
    pub error: Option<String>,
}

impl QuerySnapshot {
    /// Whether a query is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }
}

#[derive(Debug, Default)]
struct SessionState {
    latest: u64,
    snapshot: QuerySnapshot,
}

/// Thread-safe holder of the current query state
#[derive(Debug, Default)]
pub struct QuerySession {
    state: Mutex<SessionState>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new query as started and return its ticket
    ///
    /// Clears any previous error. The previous report and citations stay
    /// visible until the new result arrives.
    pub fn begin(&self, query: &LocationQuery) -> RequestTicket {
        let mut state = self.state.lock();
        state.latest += 1;
        state.snapshot.phase = QueryPhase::Loading;
        state.snapshot.error = None;
        state.snapshot.query = Some(query.clone());
        debug!(ticket = state.latest, query = %query, "Query started");
        RequestTicket(state.latest)
    }

    /// Record the outcome of a query
    ///
    /// Returns `false` and changes nothing if the ticket is no longer the
    /// latest. On failure the previous report and citations are retained.
    pub fn complete(&self, ticket: RequestTicket, outcome: Result<WindQueryResult, String>) -> bool {
        let mut state = self.state.lock();
        if ticket.0 != state.latest {
            debug!(
                ticket = ticket.0,
                latest = state.latest,
                "Discarding stale query result"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                state.snapshot.phase = QueryPhase::Loaded;
                state.snapshot.report = Some(result.report);
                state.snapshot.citations = result.citations;
                state.snapshot.error = None;
            },
            Err(message) => {
                state.snapshot.phase = QueryPhase::Errored;
                state.snapshot.error = Some(message);
            },
        }
        true
    }

    /// Record that geolocation was denied or unavailable
    ///
    /// Supersedes any query in flight.
    pub fn fail_geolocation(&self) {
        let mut state = self.state.lock();
        state.latest += 1;
        state.snapshot.phase = QueryPhase::Errored;
        state.snapshot.error = Some(GEOLOCATION_DENIED_MESSAGE.to_string());
    }

    /// Current state
    pub fn snapshot(&self) -> QuerySnapshot {
        self.state.lock().snapshot.clone()
    }
}
