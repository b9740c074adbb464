//! Situational contextualizer: time-of-day policy layered on classification.
//!
//! This is a narrow upgrade rule, not a reclassifier. It only ever turns a
//! `normal` result into `excited`, and only when the text carries excitement
//! markers during active hours. Sleepiness markers keep the result `normal`
//! in every band. Confident classifications pass through untouched.

use crate::scorer::IntensityScorer;
use crate::types::{EmotionCategory, TimeOfDay};

/// Markers of energy that are too weak to classify on their own.
pub const EXCITEMENT_MARKERS: &[&str] = &[
    "！", "!", "早く", "はやく", "行こう", "いこう", "よし", "ー！",
];

/// Markers of sleepiness or winding down.
pub const SLEEPINESS_MARKERS: &[&str] = &[
    "眠い", "ねむい", "眠た", "おやすみ", "寝る", "ねる", "ふわぁ", "zzz",
];

/// Reinterprets `normal` results using the time of day.
///
/// # Example
///
/// ```
/// use companion_mood::situational::SituationalContextualizer;
/// use companion_mood::types::{EmotionCategory, TimeOfDay};
///
/// let contextualizer = SituationalContextualizer::default();
///
/// assert_eq!(
///     contextualizer.contextualize("早く行こう！", TimeOfDay::Morning),
///     EmotionCategory::Excited,
/// );
/// assert_eq!(
///     contextualizer.contextualize("早く行こう！", TimeOfDay::Night),
///     EmotionCategory::Normal,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SituationalContextualizer {
    scorer: IntensityScorer,
}

impl SituationalContextualizer {
    pub fn new(scorer: IntensityScorer) -> Self {
        Self { scorer }
    }

    /// Classify `text` and apply the time-of-day policy to the result.
    pub fn contextualize(&self, text: &str, time_of_day: TimeOfDay) -> EmotionCategory {
        let base = self.scorer.score(text).emotion;
        self.contextualize_base(base, text, time_of_day)
    }

    /// Apply the time-of-day policy to an already computed classification,
    /// e.g. a context-inferred one.
    pub fn contextualize_base(
        &self,
        base: EmotionCategory,
        text: &str,
        time_of_day: TimeOfDay,
    ) -> EmotionCategory {
        if !base.is_baseline() {
            return base;
        }

        // Time of day has no differentiating effect on sleepiness yet.
        if contains_any(text, SLEEPINESS_MARKERS) {
            tracing::trace!(%time_of_day, "sleepiness markers keep baseline");
            return EmotionCategory::Normal;
        }

        if time_of_day.is_active_hours() && contains_any(text, EXCITEMENT_MARKERS) {
            tracing::debug!(%time_of_day, "escalating baseline to excited");
            return EmotionCategory::Excited;
        }

        EmotionCategory::Normal
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}
