//! Mood engine facade.
//!
//! Bundles the lexicon, the scoring components and the transition policy
//! into one explicitly constructed value. There is no global engine: hosts
//! build one from a [`MoodConfig`] and pass it where needed. Cloning is cheap
//! (the lexicon is shared behind an `Arc`) and the engine is `Send + Sync`.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MoodConfig;
use crate::context::ContextInferrer;
use crate::extractor::EmotionExtractor;
use crate::lexicon::EmotionLexicon;
use crate::scorer::IntensityScorer;
use crate::situational::SituationalContextualizer;
use crate::tracker::DisplayedMoodTracker;
use crate::transition::{TransitionDecision, TransitionSmoother};
use crate::types::{EmotionCategory, EmotionSet, ScoreResult, TimeOfDay};

/// Result of processing one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodUpdate {
    /// Proposed emotion and intensity for the message.
    pub proposal: ScoreResult,

    /// Emotion to display next.
    pub displayed: EmotionCategory,

    /// Rule that produced `displayed`.
    pub decision: TransitionDecision,
}

/// Emotion and mood inference engine.
///
/// # Example
///
/// ```
/// use companion_mood::{MoodConfig, MoodEngine};
/// use companion_mood::types::EmotionCategory;
///
/// let engine = MoodEngine::new(&MoodConfig::default());
/// let mut rng = rand::thread_rng();
///
/// let history = ["今日は楽しかった", "ありがとう"];
/// let update = engine.advance(EmotionCategory::Normal, "どうしよう", &history, &mut rng);
///
/// // Ambiguous message, happy context, leaving baseline is unconditional
/// assert_eq!(update.proposal.emotion, EmotionCategory::Happy);
/// assert_eq!(update.displayed, EmotionCategory::Happy);
/// ```
#[derive(Debug, Clone)]
pub struct MoodEngine {
    scorer: IntensityScorer,
    extractor: EmotionExtractor,
    context: ContextInferrer,
    situational: SituationalContextualizer,
    smoother: TransitionSmoother,
    config: MoodConfig,
}

impl MoodEngine {
    /// Engine over the shared built-in lexicon.
    pub fn new(config: &MoodConfig) -> Self {
        Self::with_lexicon(config, EmotionLexicon::shared())
    }

    /// Engine over a caller-supplied lexicon.
    pub fn with_lexicon(config: &MoodConfig, lexicon: Arc<EmotionLexicon>) -> Self {
        let scorer = IntensityScorer::new(Arc::clone(&lexicon));
        Self {
            extractor: EmotionExtractor::new(lexicon),
            context: ContextInferrer::new(scorer.clone(), &config.context),
            situational: SituationalContextualizer::new(scorer.clone()),
            smoother: TransitionSmoother::new(&config.transition),
            scorer,
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &MoodConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<EmotionLexicon> {
        self.scorer.lexicon()
    }

    pub fn smoother(&self) -> &TransitionSmoother {
        &self.smoother
    }

    /// Dominant emotion and intensity of `text`.
    pub fn score(&self, text: &str) -> ScoreResult {
        self.scorer.score(text)
    }

    /// Every emotion present in `text`.
    pub fn extract(&self, text: &str) -> EmotionSet {
        self.extractor.extract(text)
    }

    /// Emotion of `current`, resolved from `previous` when ambiguous.
    pub fn infer_from_context<S: AsRef<str>>(
        &self,
        current: &str,
        previous: &[S],
    ) -> EmotionCategory {
        self.context.infer_from_context(current, previous)
    }

    /// Classification of `text` with the time-of-day policy applied.
    pub fn contextualize(&self, text: &str, time_of_day: TimeOfDay) -> EmotionCategory {
        self.situational.contextualize(text, time_of_day)
    }

    /// Next displayed emotion for `current → target`.
    pub fn smooth<R: Rng + ?Sized>(
        &self,
        current: EmotionCategory,
        target: EmotionCategory,
        rng: &mut R,
    ) -> EmotionCategory {
        self.smoother.smooth(current, target, rng)
    }

    /// Proposed emotion and intensity for the newest message.
    pub fn assess<S: AsRef<str>>(&self, text: &str, history: &[S]) -> ScoreResult {
        self.context.infer_with_intensity(text, history)
    }

    /// Process one inbound message against the caller-held displayed emotion.
    pub fn advance<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        current: EmotionCategory,
        text: &str,
        history: &[S],
        rng: &mut R,
    ) -> MoodUpdate {
        let proposal = self.assess(text, history);
        let decision = self.smoother.decide(current, proposal.emotion, rng);
        let update = MoodUpdate {
            proposal,
            displayed: decision.resolve(current, proposal.emotion),
            decision,
        };

        tracing::debug!(
            %current,
            proposed = %update.proposal.emotion,
            intensity = update.proposal.intensity,
            displayed = %update.displayed,
            %decision,
            "advanced displayed mood"
        );
        update
    }

    /// A fresh per-session tracker using this engine's transition and decay
    /// settings.
    pub fn tracker(&self) -> DisplayedMoodTracker {
        DisplayedMoodTracker::new(self.smoother, self.config.decay)
    }
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new(&MoodConfig::default())
    }
}
