//! Domain entities

mod citation;
mod wind_report;

pub use citation::{Citation, DEFAULT_CITATION_TITLE, DEFAULT_CITATION_URI};
pub use wind_report::{ForecastPoint, WindExtraction, WindReport};
