//! Error types for Storm

use thiserror::Error;

/// The main error type for Storm operations
#[derive(Debug, Error)]
pub enum StormError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid range for {field}: min {min} is greater than max {max}")]
    InvertedRange { field: String, min: f64, max: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Storm operations
pub type Result<T> = std::result::Result<T, StormError>;

impl From<toml::de::Error> for StormError {
    fn from(err: toml::de::Error) -> Self {
        StormError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for StormError {
    fn from(err: toml::ser::Error) -> Self {
        StormError::TomlSerError(err.to_string())
    }
}
