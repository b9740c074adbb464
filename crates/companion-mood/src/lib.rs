//! Emotion and mood inference engine for companion chat.
//!
//! Given a chat message and a little recent context, the engine classifies
//! an emotion, estimates its intensity, and decides how the *displayed*
//! emotion of an avatar may change so that it never jumps jarringly between
//! unrelated emotions.
//!
//! # Modules
//!
//! - [`types`]: Emotion categories, score results, emotion sets, time-of-day
//! - [`lexicon`]: Category to trigger-string mapping (built-in Japanese set)
//! - [`scorer`]: Dominant emotion and intensity from weighted trigger hits
//! - [`extractor`]: Every emotion present in a message
//! - [`context`]: Resolution of ambiguous messages from recent context
//! - [`situational`]: Time-of-day policy layered on classification
//! - [`transition`]: Compatibility graph and damped transition smoothing
//! - [`tracker`]: Optional caller-side holder for the displayed emotion
//! - [`engine`]: [`MoodEngine`] facade bundling all of the above
//! - [`config`]: Configuration types and loading
//! - [`error`]: Boundary error types
//!
//! # Pipeline
//!
//! ```text
//! text + history ──▶ scorer ──▶ context ──▶ proposal (emotion, intensity)
//!                                                   │
//!        caller-held current emotion ──────────▶ smoother ──▶ next displayed
//! ```
//!
//! The engine is stateless apart from the smoother's single random draw,
//! which comes from a caller-supplied generator. The caller owns the current
//! displayed emotion and any decay timer.
//!
//! # Example
//!
//! ```
//! use companion_mood::{MoodConfig, MoodEngine};
//! use companion_mood::types::EmotionCategory;
//!
//! let engine = MoodEngine::new(&MoodConfig::default());
//!
//! let result = engine.score("すごく嬉しい！！ありがとう！");
//! assert_eq!(result.emotion, EmotionCategory::Happy);
//! assert!(result.intensity > 70);
//!
//! let mut rng = rand::thread_rng();
//! let next = engine.smooth(EmotionCategory::Normal, result.emotion, &mut rng);
//! assert_eq!(next, EmotionCategory::Happy);
//! ```

pub mod config;
pub mod error;
pub mod types;

pub mod context;
pub mod engine;
pub mod extractor;
pub mod lexicon;
pub mod scorer;
pub mod situational;
pub mod tracker;
pub mod transition;

pub use config::MoodConfig;
pub use error::{MoodError, MoodResult};

pub use engine::{MoodEngine, MoodUpdate};
pub use lexicon::EmotionLexicon;
pub use tracker::DisplayedMoodTracker;
pub use transition::{TransitionDecision, TransitionSmoother};
pub use types::{EmotionCategory, EmotionSet, ScoreResult, TimeOfDay};
