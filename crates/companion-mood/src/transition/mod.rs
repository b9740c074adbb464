//! Transition smoothing for the displayed emotion.
//!
//! Keeps an avatar from flipping between unrelated emotions (`happy → angry`)
//! while still letting such jumps through occasionally so the display never
//! gets stuck. The baseline is a safe harbour with no inertia in either
//! direction.

mod graph;
mod smoother;


pub use graph::{compatible_targets, is_compatible};
pub use smoother::{TransitionDecision, TransitionSmoother};
