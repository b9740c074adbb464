//! Intensity scorer: dominant emotion and intensity of one text.
//!
//! # Algorithm
//!
//! 1. For every category in lexicon order, every occurrence of every trigger
//!    adds the trigger's weight (2 for triggers longer than two characters,
//!    otherwise 1).
//! 2. The category with the strictly highest score wins; ties keep the
//!    category evaluated first.
//! 3. A maximum of 0 yields the `{normal, 50}` baseline, otherwise
//!    `intensity = min(100, max_score * 20)`.
//!
//! There is no separate intensifier pass. Repeated punctuation raises the
//! score only through doubled-punctuation triggers in the lexicon.

use std::sync::Arc;

use crate::lexicon::EmotionLexicon;
use crate::types::{EmotionCategory, ScoreResult, MAX_INTENSITY};

/// Intensity points per score point.
pub const INTENSITY_PER_POINT: u32 = 20;

/// Scores text against an [`EmotionLexicon`].
///
/// # Example
///
/// ```
/// use companion_mood::scorer::IntensityScorer;
/// use companion_mood::types::EmotionCategory;
///
/// let scorer = IntensityScorer::default();
///
/// let result = scorer.score("すごく嬉しい！！ありがとう！");
/// assert_eq!(result.emotion, EmotionCategory::Happy);
/// assert!(result.intensity > 70);
///
/// let neutral = scorer.score("今日は良い天気ですね");
/// assert_eq!(neutral.emotion, EmotionCategory::Normal);
/// assert_eq!(neutral.intensity, 50);
/// ```
#[derive(Debug, Clone)]
pub struct IntensityScorer {
    lexicon: Arc<EmotionLexicon>,
}

impl IntensityScorer {
    pub fn new(lexicon: Arc<EmotionLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Arc<EmotionLexicon> {
        &self.lexicon
    }

    /// Weighted score per category, in lexicon order.
    ///
    /// Categories without triggers are omitted.
    pub fn category_scores(&self, text: &str) -> Vec<(EmotionCategory, u32)> {
        self.lexicon
            .iter()
            .map(|(category, triggers)| {
                let score = triggers.iter().fold(0u32, |total, t| {
                    total.saturating_add(weighted_hits(t.occurrences(text), t.weight()))
                });
                (category, score)
            })
            .collect()
    }

    /// Dominant emotion and intensity of `text`.
    pub fn score(&self, text: &str) -> ScoreResult {
        let mut best: Option<(EmotionCategory, u32)> = None;

        for (category, score) in self.category_scores(text) {
            tracing::trace!(%category, score, "category score");
            // Strictly greater: ties keep the category evaluated first.
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((category, score));
            }
        }

        let result = match best {
            Some((emotion, max_score)) => {
                let intensity = max_score
                    .saturating_mul(INTENSITY_PER_POINT)
                    .min(u32::from(MAX_INTENSITY));
                ScoreResult::new(emotion, intensity as u8)
            }
            None => ScoreResult::baseline(),
        };

        tracing::debug!(
            emotion = %result.emotion,
            intensity = result.intensity,
            "scored text"
        );
        result
    }
}

/// Score contribution of one trigger, saturating at `u32::MAX`.
fn weighted_hits(occurrences: usize, weight: u32) -> u32 {
    u32::try_from(occurrences)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

impl Default for IntensityScorer {
    /// Scorer over the shared built-in lexicon.
    fn default() -> Self {
        Self::new(EmotionLexicon::shared())
    }
}
