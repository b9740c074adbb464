//! Mood engine error types.
//!
//! Classification, context inference, contextualization and smoothing are
//! total functions and never fail. Errors only arise at the boundary: loading
//! and validating configuration, parsing category names supplied by a host,
//! and emitting JSON.

use thiserror::Error;

/// Errors raised at the mood engine boundary.
#[derive(Debug, Error)]
pub enum MoodError {
    /// Configuration could not be read, parsed or merged.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A category name that is not part of the closed emotion set.
    #[error("Unknown emotion category: '{0}'")]
    UnknownEmotion(String),

    /// Unknown time-of-day band name.
    #[error("Unknown time of day: '{0}' (expected morning, afternoon, evening or night)")]
    UnknownTimeOfDay(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for mood engine boundary operations.
pub type MoodResult<T> = Result<T, MoodError>;

impl From<serde_json::Error> for MoodError {
    fn from(err: serde_json::Error) -> Self {
        MoodError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for MoodError {
    fn from(err: config::ConfigError) -> Self {
        MoodError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for MoodError {
    fn from(err: toml::de::Error) -> Self {
        MoodError::ConfigError(format!("Failed to parse config file: {}", err))
    }
}

impl MoodError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        MoodError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error for a value outside `[min, max]`.
    pub fn out_of_range(name: &str, value: f64, min: f64, max: f64) -> Self {
        MoodError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: format!("Must be in range [{}, {}]", min, max),
        }
    }

    /// Returns true if this error came from configuration loading or validation.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MoodError::ConfigError(_) | MoodError::InvalidParameter { .. }
        )
    }
}
