//! Application-level errors

use thiserror::Error;

/// Message shown to the user whenever a wind query cannot be completed
pub const WIND_DATA_UNAVAILABLE_MESSAGE: &str =
    "Could not retrieve wind data. Please try again later.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The oracle could not be reached or answered with an error
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// The oracle's structured answer could not be parsed
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Coarse failure of a wind query, safe to show to users
    #[error("{}", WIND_DATA_UNAVAILABLE_MESSAGE)]
    WindDataUnavailable,

    /// Settings storage failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_data_unavailable_message() {
        assert_eq!(
            ApplicationError::WindDataUnavailable.to_string(),
            WIND_DATA_UNAVAILABLE_MESSAGE
        );
    }

    #[test]
    fn oracle_error_keeps_cause() {
        let err = ApplicationError::Oracle("Rate limit exceeded".into());
        assert_eq!(err.to_string(), "Oracle error: Rate limit exceeded");
    }
}
