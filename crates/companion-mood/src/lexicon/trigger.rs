//! Trigger strings and their structural weight.

/// Weight of a trigger longer than [`LONG_TRIGGER_CHARS`] characters.
pub const LONG_TRIGGER_WEIGHT: u32 = 2;

/// Weight of a short trigger (single glyphs, emoji, doubled punctuation).
pub const SHORT_TRIGGER_WEIGHT: u32 = 1;

/// Triggers with more characters than this count as long.
pub const LONG_TRIGGER_CHARS: usize = 2;

/// A literal substring whose presence contributes to a category's score.
///
/// No numeric weight is configured per trigger. Longer phrases are less
/// ambiguous than single glyphs, so the weight is derived from the length in
/// characters (Unicode scalar values, not bytes).
///
/// # Example
///
/// ```
/// use companion_mood::lexicon::Trigger;
///
/// assert_eq!(Trigger::new("嬉しい").weight(), 2);
/// assert_eq!(Trigger::new("！！").weight(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trigger {
    text: String,
    weight: u32,
}

impl Trigger {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let weight = if text.chars().count() > LONG_TRIGGER_CHARS {
            LONG_TRIGGER_WEIGHT
        } else {
            SHORT_TRIGGER_WEIGHT
        };
        Self { text, weight }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Number of non-overlapping occurrences in `text`.
    ///
    /// An empty trigger never matches.
    pub fn occurrences(&self, text: &str) -> usize {
        if self.text.is_empty() {
            return 0;
        }
        text.matches(self.text.as_str()).count()
    }

    /// True if the trigger appears at least once in `text`.
    pub fn is_in(&self, text: &str) -> bool {
        !self.text.is_empty() && text.contains(self.text.as_str())
    }
}
