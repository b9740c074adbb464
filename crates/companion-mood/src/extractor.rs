//! Multi-emotion extractor: every category present in a text.

use std::sync::Arc;

use crate::lexicon::EmotionLexicon;
use crate::types::{EmotionCategory, EmotionSet};

/// Finds all categories with at least one trigger hit.
///
/// Counting here is one point per matched trigger with no length weighting,
/// independent of [`IntensityScorer`](crate::scorer::IntensityScorer).
/// `Normal` has no triggers and therefore never appears.
///
/// # Example
///
/// ```
/// use companion_mood::extractor::EmotionExtractor;
/// use companion_mood::types::EmotionCategory;
///
/// let extractor = EmotionExtractor::default();
/// let set = extractor.extract("嬉しい！本当に嬉しい！");
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(EmotionCategory::Happy));
/// ```
#[derive(Debug, Clone)]
pub struct EmotionExtractor {
    lexicon: Arc<EmotionLexicon>,
}

impl EmotionExtractor {
    pub fn new(lexicon: Arc<EmotionLexicon>) -> Self {
        Self { lexicon }
    }

    /// Number of distinct triggers matched per category, in lexicon order.
    pub fn hit_counts(&self, text: &str) -> Vec<(EmotionCategory, usize)> {
        self.lexicon
            .iter()
            .map(|(category, triggers)| {
                let hits = triggers.iter().filter(|t| t.is_in(text)).count();
                (category, hits)
            })
            .collect()
    }

    /// Every category whose hit count is above zero.
    pub fn extract(&self, text: &str) -> EmotionSet {
        let set: EmotionSet = self
            .hit_counts(text)
            .into_iter()
            .filter(|(_, hits)| *hits > 0)
            .map(|(category, _)| category)
            .collect();

        tracing::debug!(emotions = %set, "extracted emotions");
        set
    }
}

impl Default for EmotionExtractor {
    fn default() -> Self {
        Self::new(EmotionLexicon::shared())
    }
}
