//! Transition smoothing settings.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// Damping applied to incompatible emotion transitions.
///
/// When the displayed emotion and the proposed one are not neighbours in the
/// compatibility graph, a uniform draw in `[0, 1)` below `damping_threshold`
/// lets the jump through; anything else keeps the current emotion.
///
/// `0.0` suppresses every incompatible jump, `1.0` allows every one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Probability of allowing an incompatible transition.
    /// Range: `[0.0, 1.0]`
    pub damping_threshold: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            damping_threshold: 0.3,
        }
    }
}

impl TransitionConfig {
    /// Validate the transition configuration.
    pub fn validate(&self) -> MoodResult<()> {
        if !(0.0..=1.0).contains(&self.damping_threshold) {
            return Err(MoodError::out_of_range(
                "transition.damping_threshold",
                self.damping_threshold,
                0.0,
                1.0,
            ));
        }
        Ok(())
    }
}
