//! Custom error types for the energy tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for energy tracker operations
#[derive(Error, Debug)]
pub enum EnergyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for field values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed persisted data
    #[error("Format error on line {row}: {message}")]
    Format { row: u64, message: String },
}

impl EnergyError {
    /// Create a "not found" error for appliances
    pub fn appliance_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Appliance",
            identifier: identifier.into(),
        }
    }

    /// Create a format error for a given line of a data file
    pub fn format(row: u64, message: impl Into<String>) -> Self {
        Self::Format {
            row,
            message: message.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

impl From<std::io::Error> for EnergyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnergyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for EnergyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for energy tracker operations
pub type EnergyResult<T> = Result<T, EnergyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnergyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = EnergyError::appliance_not_found("Fridge");
        assert_eq!(err.to_string(), "Appliance not found: Fridge");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_format_error_names_row() {
        let err = EnergyError::format(3, "watts is not a number");
        assert_eq!(
            err.to_string(),
            "Format error on line 3: watts is not a number"
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let energy_err: EnergyError = io_err.into();
        assert!(matches!(energy_err, EnergyError::Io(_)));
    }
}
