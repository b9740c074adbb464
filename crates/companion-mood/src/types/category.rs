//! The closed set of emotion categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// An emotion the engine can classify and display.
///
/// The set is closed: an invalid category cannot be constructed, so the
/// compatibility graph and the lexicon can be matched exhaustively.
/// `Normal` is the baseline. It has no triggers, is the default, and acts as
/// a frictionless hub for transitions in either direction.
///
/// Variant declaration order is the lexicon iteration order used to break
/// scoring ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Surprised,
    Angry,
    Love,
    Shy,
    Excited,
    Worried,
    /// Baseline state with no triggers.
    #[default]
    Normal,
}

impl EmotionCategory {
    /// Every category, in declaration order.
    pub const ALL: [EmotionCategory; 9] = [
        Self::Happy,
        Self::Sad,
        Self::Surprised,
        Self::Angry,
        Self::Love,
        Self::Shy,
        Self::Excited,
        Self::Worried,
        Self::Normal,
    ];

    /// Categories that carry triggers, in lexicon iteration order.
    pub const SCORED: [EmotionCategory; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Surprised,
        Self::Angry,
        Self::Love,
        Self::Shy,
        Self::Excited,
        Self::Worried,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprised => "surprised",
            Self::Angry => "angry",
            Self::Love => "love",
            Self::Shy => "shy",
            Self::Excited => "excited",
            Self::Worried => "worried",
            Self::Normal => "normal",
        }
    }

    /// Returns a human-readable description of this category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Happy => "Joy, gratitude and contentment",
            Self::Sad => "Sadness, loneliness and disappointment",
            Self::Surprised => "Astonishment and disbelief",
            Self::Angry => "Irritation and anger",
            Self::Love => "Affection and fondness",
            Self::Shy => "Embarrassment and bashfulness",
            Self::Excited => "Anticipation and high energy",
            Self::Worried => "Concern and anxiety",
            Self::Normal => "Calm baseline with no strong emotion",
        }
    }

    /// True for the `Normal` baseline.
    #[inline]
    pub fn is_baseline(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| MoodError::UnknownEmotion(s.to_string()))
    }
}
