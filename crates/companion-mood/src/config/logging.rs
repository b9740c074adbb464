//! Logging settings consumed by hosts that install a subscriber.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Default log filter for hosts embedding the engine.
///
/// The library only emits `tracing` events; installing a subscriber is the
/// host's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> MoodResult<()> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(MoodError::invalid_parameter(
                "logging.level",
                &self.level,
                format!("Must be one of {}", LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}
