//! Wind oracle port
//!
//! Defines the narrow interface to the external generative service that
//! answers wind questions. The service is opaque: it searches the web,
//! writes prose, turns prose into JSON and draws pictures.

use async_trait::async_trait;
use domain::{Citation, LocationQuery, WindExtraction};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Free-text answer to the wind question plus the sources it was grounded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// Natural-language wind report
    pub text: String,
    /// Grounding citations, in the order the oracle returned them
    pub citations: Vec<Citation>,
}

impl Narrative {
    /// Create a new narrative
    #[must_use]
    pub fn new(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }
}

/// Inline image produced by the oracle, base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    /// Base64 image payload
    pub base64_data: String,
}

impl Illustration {
    /// Create a new illustration from base64 data
    #[must_use]
    pub fn new(base64_data: impl Into<String>) -> Self {
        Self {
            base64_data: base64_data.into(),
        }
    }

    /// Render as a PNG `data:` URI
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.base64_data)
    }
}

/// Port for the generative wind oracle
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WindOraclePort: Send + Sync {
    /// Ask for a live, web-grounded wind report for a location
    async fn narrate(&self, query: &LocationQuery) -> Result<Narrative, ApplicationError>;

    /// Turn a narrative into the fixed JSON wind shape
    ///
    /// Fails with `ApplicationError::Extraction` when the answer does not parse.
    async fn extract(
        &self,
        query: &LocationQuery,
        narrative: &str,
    ) -> Result<WindExtraction, ApplicationError>;

    /// Request a picture matching the extracted conditions
    ///
    /// Returns `Ok(None)` when the answer carries no inline image.
    async fn illustrate(
        &self,
        query: &LocationQuery,
        extraction: &WindExtraction,
    ) -> Result<Option<Illustration>, ApplicationError>;

    /// Check if the oracle is configured and reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WindOraclePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WindOraclePort>();
    }

    #[test]
    fn illustration_data_uri() {
        let image = Illustration::new("iVBORw0KGgo=");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn narrative_keeps_citation_order() {
        let narrative = Narrative::new(
            "Windy",
            vec![
                Citation::new(Some("A".into()), None),
                Citation::new(Some("B".into()), None),
            ],
        );
        assert_eq!(narrative.citations[0].title, "A");
        assert_eq!(narrative.citations[1].title, "B");
    }
}
