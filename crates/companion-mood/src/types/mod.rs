//! Core value types shared by every engine component.

mod category;
mod score;
mod time_of_day;

pub use category::EmotionCategory;
pub use score::{EmotionSet, ScoreResult, BASELINE_INTENSITY, MAX_INTENSITY};
pub use time_of_day::TimeOfDay;
