//! Wind query service - Orchestrates the three oracle stages
//!
//! narrative (web search) -> structured extraction -> optional illustration.
//! The service keeps no state between calls.

use std::{fmt, sync::Arc};

use chrono::Local;
use domain::{Citation, LocationQuery, WindExtraction, WindReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::{error::ApplicationError, ports::WindOraclePort};

/// A resolved wind query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindQueryResult {
    /// Structured report
    pub report: WindReport,
    /// Sources the narrative was grounded on
    pub citations: Vec<Citation>,
}

/// Service resolving location queries into wind reports
pub struct WindQueryService {
    oracle: Arc<dyn WindOraclePort>,
    illustrations_enabled: bool,
}

impl fmt::Debug for WindQueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindQueryService")
            .field("illustrations_enabled", &self.illustrations_enabled)
            .finish_non_exhaustive()
    }
}

impl WindQueryService {
    /// Create a new service with illustrations enabled
    pub fn new(oracle: Arc<dyn WindOraclePort>) -> Self {
        Self {
            oracle,
            illustrations_enabled: true,
        }
    }

    /// Enable or disable the illustration stage
    #[must_use]
    pub const fn with_illustrations(mut self, enabled: bool) -> Self {
        self.illustrations_enabled = enabled;
        self
    }

    /// Resolve a location into a wind report and its citations
    ///
    /// Any failure in the narrative or extraction stage is logged and
    /// collapsed into `ApplicationError::WindDataUnavailable`. Illustration
    /// failures never fail the query.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn resolve(&self, query: &LocationQuery) -> Result<WindQueryResult, ApplicationError> {
        match self.run_stages(query).await {
            Ok(result) => {
                info!(
                    location = %result.report.location,
                    speed_kmh = result.report.speed_kmh,
                    beaufort = result.report.beaufort_scale,
                    citations = result.citations.len(),
                    has_image = result.report.image_uri.is_some(),
                    "Wind query resolved"
                );
                Ok(result)
            },
            Err(e) => {
                error!(error = %e, "Wind query failed");
                Err(ApplicationError::WindDataUnavailable)
            },
        }
    }

    /// Check if the underlying oracle is available
    pub async fn is_available(&self) -> bool {
        self.oracle.is_available().await
    }

    async fn run_stages(&self, query: &LocationQuery) -> Result<WindQueryResult, ApplicationError> {
        let narrative = self.oracle.narrate(query).await?;
        debug!(
            text_len = narrative.text.len(),
            citations = narrative.citations.len(),
            "Narrative received"
        );

        let extraction = self.oracle.extract(query, &narrative.text).await?;
        let captured_at = Local::now();

        let image_uri = if self.illustrations_enabled {
            self.illustrate(query, &extraction).await
        } else {
            None
        };

        let mut report = WindReport::from_extraction(extraction, captured_at);
        if let Some(uri) = image_uri {
            report = report.with_image(uri);
        }

        Ok(WindQueryResult {
            report,
            citations: narrative.citations,
        })
    }

    async fn illustrate(&self, query: &LocationQuery, extraction: &WindExtraction) -> Option<String> {
        match self.oracle.illustrate(query, extraction).await {
            Ok(Some(image)) => Some(image.to_data_uri()),
            Ok(None) => {
                debug!("Illustration response carried no image");
                None
            },
            Err(e) => {
                warn!(error = %e, "Failed to generate wind illustration");
                None
            },
        }
    }
}
