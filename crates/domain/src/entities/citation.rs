//! Grounding citations attached to a wind report

use serde::{Deserialize, Serialize};

/// Title used when the oracle supplies none
pub const DEFAULT_CITATION_TITLE: &str = "Source";

/// Link used when the oracle supplies none
pub const DEFAULT_CITATION_URI: &str = "#";

/// A web source the oracle grounded its answer on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Display title, never empty
    pub title: String,
    /// Absolute link or `"#"`
    pub uri: String,
}

impl Citation {
    /// Create a citation, substituting placeholders for missing parts
    #[must_use]
    pub fn new(title: Option<String>, uri: Option<String>) -> Self {
        Self {
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CITATION_TITLE.to_string()),
            uri: uri
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CITATION_URI.to_string()),
        }
    }

    /// Whether the link is a real URL rather than the placeholder
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.uri != DEFAULT_CITATION_URI
    }
}
