//! Values derived from a wind report for display

use serde::{Deserialize, Serialize};
use std::fmt;

use super::beaufort::beaufort_description;
use crate::entities::WindReport;

/// Kilometres per hour in one metre per second
pub const KMH_PER_MS: f64 = 3.6;

/// Knots in one kilometre per hour
pub const KNOTS_PER_KMH: f64 = 0.539_957;

/// Speeds above this are labelled unstable (km/h)
pub const STABILITY_LIMIT_KMH: f64 = 50.0;

/// Rough stability of the current wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    /// At or below the stability limit
    Stable,
    /// Above the stability limit
    Unstable,
}

impl Stability {
    /// Classify a speed in km/h
    #[must_use]
    pub fn from_speed(speed_kmh: f64) -> Self {
        if speed_kmh > STABILITY_LIMIT_KMH {
            Self::Unstable
        } else {
            Self::Stable
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert km/h to m/s, rounded to one decimal
#[must_use]
pub fn kmh_to_ms(speed_kmh: f64) -> f64 {
    round_one_decimal(speed_kmh / KMH_PER_MS)
}

/// Convert km/h to knots, rounded to one decimal
#[must_use]
pub fn kmh_to_knots(speed_kmh: f64) -> f64 {
    round_one_decimal(speed_kmh * KNOTS_PER_KMH)
}

/// Display values computed from an accepted report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindMetrics {
    /// Speed in metres per second
    pub speed_ms: f64,
    /// Speed in knots
    pub speed_knots: f64,
    /// Stability classification
    pub stability: Stability,
    /// Beaufort description, or "Unknown"
    pub beaufort_label: String,
}

impl WindMetrics {
    /// Derive metrics from a report
    #[must_use]
    pub fn from_report(report: &WindReport) -> Self {
        Self {
            speed_ms: kmh_to_ms(report.speed_kmh),
            speed_knots: kmh_to_knots(report.speed_kmh),
            stability: Stability::from_speed(report.speed_kmh),
            beaufort_label: beaufort_description(report.beaufort_scale).to_string(),
        }
    }
}
