//! Transition smoother state machine.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TransitionConfig;
use crate::types::EmotionCategory;

use super::graph;

/// Which rule decided a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDecision {
    /// Target equals current.
    Unchanged,
    /// Either side is the baseline; always allowed.
    Baseline,
    /// Target is a neighbour in the compatibility graph.
    Compatible,
    /// Incompatible, but the damping draw let it through.
    DampedAllowed,
    /// Incompatible and suppressed; current emotion kept.
    DampedSuppressed,
}

impl TransitionDecision {
    /// True if the displayed emotion becomes the target.
    #[inline]
    pub fn allows_target(&self) -> bool {
        !matches!(self, Self::DampedSuppressed)
    }

    /// True if the decision consumed a random draw.
    #[inline]
    pub fn was_damped(&self) -> bool {
        matches!(self, Self::DampedAllowed | Self::DampedSuppressed)
    }

    /// Emotion to display after this decision.
    #[inline]
    pub fn resolve(&self, current: EmotionCategory, target: EmotionCategory) -> EmotionCategory {
        if self.allows_target() {
            target
        } else {
            current
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Baseline => "baseline",
            Self::Compatible => "compatible",
            Self::DampedAllowed => "damped_allowed",
            Self::DampedSuppressed => "damped_suppressed",
        }
    }
}

impl fmt::Display for TransitionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a proposed emotion may replace the displayed one.
///
/// Rules, in order:
/// 1. Same emotion: no-op.
/// 2. Either side is `Normal`: the target wins immediately.
/// 3. Target is compatible with current: the target wins.
/// 4. Otherwise one uniform draw in `[0, 1)`; below the damping threshold
///    the target wins, else the current emotion is kept.
///
/// The random source is injected, so callers and tests control it. Rules 1-3
/// never touch the generator.
///
/// # Example
///
/// ```
/// use companion_mood::transition::TransitionSmoother;
/// use companion_mood::types::EmotionCategory;
///
/// let smoother = TransitionSmoother::default();
/// let mut rng = rand::thread_rng();
///
/// // Compatible: deterministic
/// assert_eq!(
///     smoother.smooth(EmotionCategory::Happy, EmotionCategory::Excited, &mut rng),
///     EmotionCategory::Excited,
/// );
///
/// // Incompatible: usually suppressed, occasionally allowed
/// let next = smoother.smooth(EmotionCategory::Happy, EmotionCategory::Angry, &mut rng);
/// assert!(next == EmotionCategory::Happy || next == EmotionCategory::Angry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSmoother {
    damping_threshold: f64,
}

impl TransitionSmoother {
    /// Create a smoother; the threshold is clamped to `[0, 1]`.
    pub fn new(config: &TransitionConfig) -> Self {
        Self::with_threshold(config.damping_threshold)
    }

    /// Create a smoother with an explicit damping threshold.
    pub fn with_threshold(damping_threshold: f64) -> Self {
        let clamped = if damping_threshold.is_nan() {
            TransitionConfig::default().damping_threshold
        } else {
            damping_threshold.clamp(0.0, 1.0)
        };
        if clamped != damping_threshold {
            tracing::warn!(
                requested = damping_threshold,
                using = clamped,
                "damping threshold outside [0, 1]"
            );
        }
        Self {
            damping_threshold: clamped,
        }
    }

    pub fn damping_threshold(&self) -> f64 {
        self.damping_threshold
    }

    /// True when `to` is reachable from `from` without damping.
    pub fn is_compatible(&self, from: EmotionCategory, to: EmotionCategory) -> bool {
        from == to || from.is_baseline() || to.is_baseline() || graph::is_compatible(from, to)
    }

    /// Next displayed emotion.
    pub fn smooth<R: Rng + ?Sized>(
        &self,
        current: EmotionCategory,
        target: EmotionCategory,
        rng: &mut R,
    ) -> EmotionCategory {
        self.decide(current, target, rng).resolve(current, target)
    }

    /// Which rule applies to `current → target`.
    pub fn decide<R: Rng + ?Sized>(
        &self,
        current: EmotionCategory,
        target: EmotionCategory,
        rng: &mut R,
    ) -> TransitionDecision {
        let decision = if target == current {
            TransitionDecision::Unchanged
        } else if current.is_baseline() || target.is_baseline() {
            TransitionDecision::Baseline
        } else if graph::is_compatible(current, target) {
            TransitionDecision::Compatible
        } else {
            let draw: f64 = rng.gen();
            if draw < self.damping_threshold {
                TransitionDecision::DampedAllowed
            } else {
                TransitionDecision::DampedSuppressed
            }
        };

        tracing::debug!(
            %current,
            %target,
            %decision,
            "transition decided"
        );
        decision
    }
}

impl Default for TransitionSmoother {
    fn default() -> Self {
        Self::new(&TransitionConfig::default())
    }
}
