//! Classification results.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::EmotionCategory;

/// Intensity carried by the `Normal` baseline.
pub const BASELINE_INTENSITY: u8 = 50;

/// Upper bound for any intensity value.
pub const MAX_INTENSITY: u8 = 100;

/// Dominant emotion of one text input with its intensity in `[0, 100]`.
///
/// The engine does not retain results; the caller decides what to keep.
///
/// # Example
///
/// ```
/// use companion_mood::types::{EmotionCategory, ScoreResult};
///
/// let baseline = ScoreResult::baseline();
/// assert_eq!(baseline.emotion, EmotionCategory::Normal);
/// assert_eq!(baseline.intensity, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Dominant category.
    pub emotion: EmotionCategory,

    /// Intensity in `[0, 100]`.
    pub intensity: u8,
}

impl ScoreResult {
    /// Create a result, clamping intensity to `[0, 100]`.
    pub fn new(emotion: EmotionCategory, intensity: u8) -> Self {
        Self {
            emotion,
            intensity: intensity.min(MAX_INTENSITY),
        }
    }

    /// The `{normal, 50}` baseline result.
    pub fn baseline() -> Self {
        Self {
            emotion: EmotionCategory::Normal,
            intensity: BASELINE_INTENSITY,
        }
    }

    /// True when the dominant category is the baseline.
    #[inline]
    pub fn is_baseline(&self) -> bool {
        self.emotion.is_baseline()
    }
}

impl Default for ScoreResult {
    fn default() -> Self {
        Self::baseline()
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.emotion, self.intensity)
    }
}

/// Every category detected in one text input, without duplicates.
///
/// Membership is what matters; iteration follows lexicon order so output is
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionSet {
    categories: BTreeSet<EmotionCategory>,
}

impl EmotionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. Returns false if it was already present.
    pub fn insert(&mut self, category: EmotionCategory) -> bool {
        self.categories.insert(category)
    }

    pub fn contains(&self, category: EmotionCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EmotionCategory> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<EmotionCategory> for EmotionSet {
    fn from_iter<I: IntoIterator<Item = EmotionCategory>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EmotionSet {
    type Item = EmotionCategory;
    type IntoIter = std::collections::btree_set::IntoIter<EmotionCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}

impl fmt::Display for EmotionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
