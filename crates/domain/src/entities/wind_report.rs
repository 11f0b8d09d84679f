//! Wind report entities

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One hourly point of the short-term forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Hour label, e.g. `"14:00"`
    pub time: String,
    /// Forecast speed in km/h
    pub speed: f64,
}

impl ForecastPoint {
    /// Create a new forecast point
    #[must_use]
    pub fn new(time: impl Into<String>, speed: f64) -> Self {
        Self {
            time: time.into(),
            speed,
        }
    }
}

/// Structured wind data exactly as the oracle emits it
///
/// Successful parsing is the only check applied; ranges are trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindExtraction {
    pub location: String,
    pub speed_kmh: f64,
    #[serde(default)]
    pub gusts_kmh: Option<f64>,
    pub direction: String,
    pub direction_deg: f64,
    pub description: String,
    pub beaufort_scale: i32,
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
}

impl WindExtraction {
    /// Parse the oracle's JSON answer
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedWindData` when the text is not JSON or
    /// does not have the expected fields and types.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::MalformedWindData(e.to_string()))
    }
}

/// Current wind conditions for a location, as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindReport {
    /// Location name as resolved by the oracle
    pub location: String,
    /// Current sustained speed in km/h
    pub speed_kmh: f64,
    /// Gust speed in km/h, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gusts_kmh: Option<f64>,
    /// Compass label, e.g. `"Northwest"`
    pub direction: String,
    /// Direction in degrees
    pub direction_deg: f64,
    /// Short free-text description
    pub description: String,
    /// Beaufort force
    pub beaufort_scale: i32,
    /// When the report was captured (local time)
    pub captured_at: DateTime<Local>,
    /// Illustration as a `data:` URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Hourly forecast, in chronological order
    pub forecast: Vec<ForecastPoint>,
}

impl WindReport {
    /// Build a report from an accepted extraction
    #[must_use]
    pub fn from_extraction(extraction: WindExtraction, captured_at: DateTime<Local>) -> Self {
        Self {
            location: extraction.location,
            speed_kmh: extraction.speed_kmh,
            gusts_kmh: extraction.gusts_kmh,
            direction: extraction.direction,
            direction_deg: extraction.direction_deg,
            description: extraction.description,
            beaufort_scale: extraction.beaufort_scale,
            captured_at,
            image_uri: None,
            forecast: extraction.forecast,
        }
    }

    /// Attach an illustration
    #[must_use]
    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = Some(image_uri.into());
        self
    }

    /// Capture time formatted as `HH:MM:SS`
    #[must_use]
    pub fn captured_time_label(&self) -> String {
        self.captured_at.format("%H:%M:%S").to_string()
    }
}
