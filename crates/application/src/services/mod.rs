//! Application services

pub mod alert_settings_service;
pub mod query_session;
pub mod wind_query_service;

pub use alert_settings_service::{AlertSettingsService, ENABLED_KEY, THRESHOLD_KEY};
pub use query_session::{
    GEOLOCATION_DENIED_MESSAGE, QueryPhase, QuerySession, QuerySnapshot, RequestTicket,
};
pub use wind_query_service::{WindQueryResult, WindQueryService};
