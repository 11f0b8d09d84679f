//! Value Objects - Immutable, identity-less domain primitives

mod alert_settings;
mod beaufort;
mod geo_location;
mod location_query;
mod wind_metrics;

pub use alert_settings::{
    ALERT_THRESHOLD_STEP_KMH, AlertSettings, DEFAULT_ALERT_THRESHOLD_KMH, MAX_ALERT_THRESHOLD_KMH,
    MIN_ALERT_THRESHOLD_KMH,
};
pub use beaufort::{BEAUFORT_DESCRIPTIONS, BEAUFORT_MAX, UNKNOWN_BEAUFORT_LABEL, beaufort_description};
pub use geo_location::GeoLocation;
pub use location_query::LocationQuery;
pub use wind_metrics::{
    KMH_PER_MS, KNOTS_PER_KMH, STABILITY_LIMIT_KMH, Stability, WindMetrics, kmh_to_knots,
    kmh_to_ms, round_one_decimal,
};
