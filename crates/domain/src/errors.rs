//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Location query was empty or whitespace only
    #[error("Invalid location query: {0}")]
    InvalidLocationQuery(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Structured wind data could not be parsed
    #[error("Malformed wind data: {0}")]
    MalformedWindData(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_location_query_message() {
        let err = DomainError::InvalidLocationQuery("empty".to_string());
        assert_eq!(err.to_string(), "Invalid location query: empty");
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn malformed_wind_data_message() {
        let err = DomainError::MalformedWindData("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed wind data: expected value at line 1"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
