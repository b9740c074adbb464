//! Displayed-mood decay settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// Controls how quickly a displayed emotion fades back to the baseline.
///
/// Used by [`DisplayedMoodTracker`](crate::tracker::DisplayedMoodTracker).
/// Intensities are on the same `[0, 100]` scale as
/// [`ScoreResult`](crate::types::ScoreResult).
///
/// # Example
///
/// ```
/// use companion_mood::config::DecayConfig;
///
/// // Slower fade, earlier return to baseline
/// let decay = DecayConfig {
///     half_life_secs: 300.0,
///     neutral_threshold: 20.0,
///     ..Default::default()
/// };
/// assert!(decay.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Half-life for exponential decay in seconds.
    pub half_life_secs: f32,

    /// Intensity below which the display returns to baseline.
    pub neutral_threshold: f32,

    /// Intensity added when the same emotion is proposed again.
    pub reinforcement_boost: u8,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_secs: 120.0, // 2 minutes
            neutral_threshold: 10.0,
            reinforcement_boost: 20,
        }
    }
}

impl DecayConfig {
    /// Decay for short-lived reactions.
    pub fn fast() -> Self {
        Self {
            half_life_secs: 30.0,
            neutral_threshold: 15.0,
            reinforcement_boost: 15,
        }
    }

    /// Decay for sustained moods.
    pub fn slow() -> Self {
        Self {
            half_life_secs: 300.0,
            neutral_threshold: 5.0,
            reinforcement_boost: 25,
        }
    }

    /// No decay: the display only changes through new proposals.
    pub fn persistent() -> Self {
        Self {
            half_life_secs: f32::MAX,
            neutral_threshold: 0.0,
            reinforcement_boost: 0,
        }
    }

    /// Multiplier in `[0, 1]` to apply to intensity after `elapsed`.
    ///
    /// A non-positive or NaN half-life decays immediately (factor 0).
    pub fn decay_factor(&self, elapsed: Duration) -> f32 {
        if self.half_life_secs.is_nan() || self.half_life_secs <= 0.0 {
            tracing::warn!(
                half_life_secs = self.half_life_secs,
                "non-positive decay half-life, decaying immediately"
            );
            return 0.0;
        }
        0.5_f32.powf(elapsed.as_secs_f32() / self.half_life_secs)
    }

    /// Validate the decay configuration.
    pub fn validate(&self) -> MoodResult<()> {
        if self.half_life_secs.is_nan() || self.half_life_secs <= 0.0 {
            return Err(MoodError::invalid_parameter(
                "decay.half_life_secs",
                self.half_life_secs,
                "Must be greater than 0",
            ));
        }
        if !(0.0..=100.0).contains(&self.neutral_threshold) {
            return Err(MoodError::out_of_range(
                "decay.neutral_threshold",
                f64::from(self.neutral_threshold),
                0.0,
                100.0,
            ));
        }
        if self.reinforcement_boost > 100 {
            return Err(MoodError::invalid_parameter(
                "decay.reinforcement_boost",
                self.reinforcement_boost,
                "Must not exceed 100",
            ));
        }
        Ok(())
    }
}
