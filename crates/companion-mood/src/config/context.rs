//! Context inference settings.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// How much recent conversation the context inferrer consults.
///
/// Only the last `window_size` prior messages are classified when the current
/// message is ambiguous. Order within the window does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Number of most recent prior messages to examine.
    pub window_size: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { window_size: 3 }
    }
}

impl ContextConfig {
    /// Validate the context configuration.
    pub fn validate(&self) -> MoodResult<()> {
        if self.window_size == 0 {
            return Err(MoodError::invalid_parameter(
                "context.window_size",
                self.window_size,
                "Must be at least 1",
            ));
        }
        Ok(())
    }
}
