//! Caller-side tracking of the displayed emotion.
//!
//! The engine itself is stateless. Hosts that want a ready-made holder for
//! the current displayed emotion can keep one [`DisplayedMoodTracker`] per
//! session: it threads every proposal through the transition smoother and
//! fades intensity back to the baseline from elapsed time the host supplies.
//! The tracker never reads the clock or starts timers.

use std::time::Duration;

use rand::Rng;

use crate::config::DecayConfig;
use crate::transition::{TransitionDecision, TransitionSmoother};
use crate::types::{EmotionCategory, ScoreResult, BASELINE_INTENSITY, MAX_INTENSITY};

/// Intensity above which the display counts as intense.
const INTENSE_THRESHOLD: f32 = 70.0;

/// Holds the displayed emotion of one session.
///
/// Updates must be applied in message arrival order; the tracker is not
/// shared between threads.
///
/// # Example
///
/// ```
/// use companion_mood::tracker::DisplayedMoodTracker;
/// use companion_mood::types::{EmotionCategory, ScoreResult};
/// use std::time::Duration;
///
/// let mut tracker = DisplayedMoodTracker::default();
/// let mut rng = rand::thread_rng();
///
/// // Leaving the baseline is always allowed
/// tracker.apply(ScoreResult::new(EmotionCategory::Happy, 80), &mut rng);
/// assert_eq!(tracker.current(), EmotionCategory::Happy);
///
/// // Ten minutes without reinforcement fades back to baseline
/// tracker.decay(Duration::from_secs(600));
/// assert!(tracker.is_baseline());
/// ```
#[derive(Debug, Clone)]
pub struct DisplayedMoodTracker {
    /// Current displayed emotion.
    current: EmotionCategory,

    /// Current intensity on the `[0, 100]` scale.
    intensity: f32,

    smoother: TransitionSmoother,

    decay: DecayConfig,
}

impl DisplayedMoodTracker {
    /// Create a tracker at the `{normal, 50}` baseline.
    pub fn new(smoother: TransitionSmoother, decay: DecayConfig) -> Self {
        Self {
            current: EmotionCategory::Normal,
            intensity: f32::from(BASELINE_INTENSITY),
            smoother,
            decay,
        }
    }

    #[inline]
    pub fn current(&self) -> EmotionCategory {
        self.current
    }

    /// Current intensity, rounded to the `[0, 100]` integer scale.
    #[inline]
    pub fn intensity(&self) -> u8 {
        self.intensity.round().clamp(0.0, f32::from(MAX_INTENSITY)) as u8
    }

    /// Current state as a score.
    pub fn snapshot(&self) -> ScoreResult {
        ScoreResult::new(self.current, self.intensity())
    }

    pub fn is_baseline(&self) -> bool {
        self.current.is_baseline()
    }

    pub fn is_intense(&self) -> bool {
        !self.is_baseline() && self.intensity > INTENSE_THRESHOLD
    }

    /// Apply a proposal and return the emotion now displayed.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        proposal: ScoreResult,
        rng: &mut R,
    ) -> EmotionCategory {
        self.apply_with_decision(proposal, rng);
        self.current
    }

    /// Apply a proposal and report which transition rule decided it.
    ///
    /// - Same emotion: intensity is reinforced (never below the proposal).
    /// - Allowed change: the proposal's emotion and intensity are adopted.
    /// - Suppressed change: nothing changes.
    pub fn apply_with_decision<R: Rng + ?Sized>(
        &mut self,
        proposal: ScoreResult,
        rng: &mut R,
    ) -> TransitionDecision {
        let decision = self.smoother.decide(self.current, proposal.emotion, rng);

        match decision {
            TransitionDecision::Unchanged => {
                if !self.is_baseline() {
                    self.reinforce(proposal.intensity);
                }
            }
            TransitionDecision::DampedSuppressed => {}
            _ => self.set(proposal),
        }

        decision
    }

    /// Fade intensity over `elapsed`; drop to baseline below the threshold.
    ///
    /// The baseline itself does not decay.
    pub fn decay(&mut self, elapsed: Duration) {
        if self.is_baseline() {
            return;
        }

        self.intensity *= self.decay.decay_factor(elapsed);

        if self.intensity.is_nan()
            || self.intensity <= 0.0
            || self.intensity < self.decay.neutral_threshold
        {
            tracing::debug!(
                from = %self.current,
                elapsed_secs = elapsed.as_secs_f32(),
                "displayed emotion decayed to baseline"
            );
            self.reset();
        }
    }

    /// Return to the `{normal, 50}` baseline.
    pub fn reset(&mut self) {
        self.current = EmotionCategory::Normal;
        self.intensity = f32::from(BASELINE_INTENSITY);
    }

    /// Force a specific state, bypassing the smoother.
    ///
    /// Use sparingly; prefer `apply()` for normal updates.
    pub fn force(&mut self, state: ScoreResult) {
        self.set(state);
    }

    fn set(&mut self, state: ScoreResult) {
        self.current = state.emotion;
        self.intensity = if state.is_baseline() {
            f32::from(BASELINE_INTENSITY)
        } else {
            f32::from(state.intensity.min(MAX_INTENSITY))
        };
    }

    fn reinforce(&mut self, proposed: u8) {
        let boosted = self.intensity + f32::from(self.decay.reinforcement_boost);
        self.intensity = boosted
            .max(f32::from(proposed))
            .min(f32::from(MAX_INTENSITY));
    }
}

impl Default for DisplayedMoodTracker {
    fn default() -> Self {
        Self::new(TransitionSmoother::default(), DecayConfig::default())
    }
}
