//! Fixed compatibility graph between emotions.

use crate::types::EmotionCategory;

use EmotionCategory::*;

/// Categories `from` may move into directly, without damping.
///
/// The match is exhaustive, so adding a category forces a decision here.
/// `Normal` lists every category: leaving the baseline is always
/// unconditional.
pub const fn compatible_targets(from: EmotionCategory) -> &'static [EmotionCategory] {
    match from {
        Happy => &[Excited, Love, Normal],
        Sad => &[Worried, Normal],
        Angry => &[Sad, Normal],
        Surprised => &[Happy, Worried, Excited],
        Love => &[Happy, Shy, Normal],
        Shy => &[Love, Happy, Normal],
        Excited => &[Happy, Surprised],
        Worried => &[Sad, Normal],
        Normal => &[Happy, Sad, Surprised, Angry, Love, Shy, Excited, Worried],
    }
}

/// True when `to` is listed as a direct neighbour of `from`.
pub fn is_compatible(from: EmotionCategory, to: EmotionCategory) -> bool {
    compatible_targets(from).contains(&to)
}
