//! Emotion lexicon implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::types::EmotionCategory;

use super::trigger::Trigger;

/// Process-wide default lexicon, built once on first use.
static DEFAULT_LEXICON: OnceLock<Arc<EmotionLexicon>> = OnceLock::new();

/// Mapping from emotion category to its ordered trigger strings.
///
/// Iteration follows [`EmotionCategory::SCORED`] order, which is what makes
/// scoring ties deterministic. `Normal` never carries triggers.
///
/// # Example
///
/// ```
/// use companion_mood::lexicon::EmotionLexicon;
/// use companion_mood::types::EmotionCategory;
///
/// let mut lexicon = EmotionLexicon::new();
/// lexicon.add_trigger(EmotionCategory::Happy, "嬉しい");
/// lexicon.add_trigger(EmotionCategory::Sad, "悲しい");
///
/// assert_eq!(lexicon.len(), 2);
/// assert!(lexicon.contains(EmotionCategory::Happy, "嬉しい"));
/// ```
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    entries: BTreeMap<EmotionCategory, Vec<Trigger>>,
}

impl EmotionLexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Shared handle to the built-in Japanese lexicon.
    pub fn shared() -> Arc<EmotionLexicon> {
        Arc::clone(DEFAULT_LEXICON.get_or_init(|| Arc::new(EmotionLexicon::default())))
    }

    /// Append a trigger to a category.
    ///
    /// Returns `false` and leaves the lexicon unchanged when the trigger is
    /// empty, already present for the category, or the category is the
    /// `Normal` baseline.
    pub fn add_trigger(&mut self, category: EmotionCategory, trigger: &str) -> bool {
        if category.is_baseline() {
            tracing::warn!(trigger, "ignoring trigger for the normal baseline");
            return false;
        }
        if trigger.is_empty() {
            return false;
        }

        let triggers = self.entries.entry(category).or_default();
        if triggers.iter().any(|t| t.text() == trigger) {
            return false;
        }
        triggers.push(Trigger::new(trigger));
        true
    }

    /// Append several triggers to a category, in order.
    pub fn add_triggers<'a>(
        &mut self,
        category: EmotionCategory,
        triggers: impl IntoIterator<Item = &'a str>,
    ) {
        for trigger in triggers {
            self.add_trigger(category, trigger);
        }
    }

    /// Ordered triggers for a category. Empty for `Normal`.
    pub fn triggers(&self, category: EmotionCategory) -> &[Trigger] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if a category has a given trigger.
    pub fn contains(&self, category: EmotionCategory, trigger: &str) -> bool {
        self.triggers(category).iter().any(|t| t.text() == trigger)
    }

    /// Categories with their triggers, in lexicon order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, &[Trigger])> {
        self.entries
            .iter()
            .map(|(category, triggers)| (*category, triggers.as_slice()))
    }

    /// Total number of triggers across all categories.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge another lexicon into this one.
    ///
    /// Triggers already present for a category are kept once.
    pub fn merge(&mut self, other: &EmotionLexicon) {
        for (category, triggers) in other.iter() {
            for trigger in triggers {
                self.add_trigger(category, trigger.text());
            }
        }
    }
}
