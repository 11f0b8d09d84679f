//! WindWatch HTTP presentation layer
//!
//! Exposes wind queries, the current view state and the alert settings
//! over a JSON API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::{AppState, QueryOutcome};
