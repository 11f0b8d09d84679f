//! Location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// A free-text location as typed by the user or derived from geolocation
///
/// The text is passed to the oracle untouched; no geocoding happens locally.
/// The only invariant is that it contains something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a new location query
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocationQuery` if the text is blank.
    pub fn new(query: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = query.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLocationQuery(
                "location must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a query from a geolocation fix, formatted as `"lat, lon"`
    #[must_use]
    pub fn from_coordinates(location: &GeoLocation) -> Self {
        Self(location.to_string())
    }

    /// Get the query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
