//! Context inferrer: resolves ambiguous messages from conversational momentum.
//!
//! A message that classifies as `normal` on its own ("どうしよう", "そうなんだ")
//! borrows its mood from the most recent few messages:
//!
//! - any happy message in the window → `happy`
//! - otherwise any sad message → `worried` (a vague follow-up to sadness reads
//!   as concern, not as sadness itself)
//! - otherwise `normal`
//!
//! Only happy and sad context is consulted, in that priority order. A message
//! that classifies confidently on its own is never overridden.

use crate::config::ContextConfig;
use crate::scorer::IntensityScorer;
use crate::types::{EmotionCategory, ScoreResult};

/// Resolves `normal` classifications using a window of prior messages.
///
/// # Example
///
/// ```
/// use companion_mood::context::ContextInferrer;
/// use companion_mood::types::EmotionCategory;
///
/// let inferrer = ContextInferrer::default();
/// let history = ["嬉しい", "楽しい", "ありがとう", "悲しい"];
///
/// assert_eq!(
///     inferrer.infer_from_context("どうしよう", &history),
///     EmotionCategory::Happy,
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ContextInferrer {
    scorer: IntensityScorer,
    window_size: usize,
}

impl ContextInferrer {
    pub fn new(scorer: IntensityScorer, config: &ContextConfig) -> Self {
        Self {
            scorer,
            window_size: config.window_size,
        }
    }

    /// Number of most recent prior messages consulted.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Emotion of `current`, falling back on recent context when ambiguous.
    pub fn infer_from_context<S: AsRef<str>>(
        &self,
        current: &str,
        previous: &[S],
    ) -> EmotionCategory {
        self.infer_with_intensity(current, previous).emotion
    }

    /// Like [`infer_from_context`](Self::infer_from_context) but keeps an
    /// intensity for the proposal.
    ///
    /// A confident current message keeps its own score. A context-resolved
    /// result carries the intensity of the context message that decided it.
    pub fn infer_with_intensity<S: AsRef<str>>(
        &self,
        current: &str,
        previous: &[S],
    ) -> ScoreResult {
        let own = self.scorer.score(current);
        if !own.is_baseline() {
            return own;
        }

        let window_start = previous.len().saturating_sub(self.window_size);
        let window: Vec<ScoreResult> = previous[window_start..]
            .iter()
            .map(|text| self.scorer.score(text.as_ref()))
            .collect();

        let resolved = if let Some(happy) = find(&window, EmotionCategory::Happy) {
            ScoreResult::new(EmotionCategory::Happy, happy.intensity)
        } else if let Some(sad) = find(&window, EmotionCategory::Sad) {
            ScoreResult::new(EmotionCategory::Worried, sad.intensity)
        } else {
            own
        };

        tracing::debug!(
            window = window.len(),
            emotion = %resolved.emotion,
            "resolved ambiguous message from context"
        );
        resolved
    }
}

impl Default for ContextInferrer {
    fn default() -> Self {
        Self::new(IntensityScorer::default(), &ContextConfig::default())
    }
}

fn find(window: &[ScoreResult], emotion: EmotionCategory) -> Option<&ScoreResult> {
    window.iter().find(|result| result.emotion == emotion)
}
