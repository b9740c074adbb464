//! Emotion lexicon: category to weighted trigger strings.
//!
//! The lexicon is immutable once built. The built-in Japanese lexicon is
//! created once per process and shared through [`EmotionLexicon::shared`].

mod default_triggers;
mod lexicon_impl;
mod trigger;


pub use lexicon_impl::EmotionLexicon;
pub use trigger::{Trigger, LONG_TRIGGER_CHARS, LONG_TRIGGER_WEIGHT, SHORT_TRIGGER_WEIGHT};
