//! Session Tests
//!
//! Multi-message conversations threaded through the engine and tracker

use std::time::Duration;

use companion_mood::config::DecayConfig;
use companion_mood::{
    DisplayedMoodTracker, EmotionCategory, MoodConfig, MoodEngine, ScoreResult,
    TransitionDecision, TransitionSmoother,
};

use super::helpers::{always_allow, always_suppress, seeded_rng};

const NO_HISTORY: [&str; 0] = [];

/// Feed `messages` through `advance`, keeping history and the displayed
/// emotion the way a host would.
fn run_conversation(
    engine: &MoodEngine,
    messages: &[&str],
    rng: &mut impl rand::Rng,
) -> Vec<EmotionCategory> {
    let mut history: Vec<&str> = Vec::new();
    let mut displayed = EmotionCategory::Normal;
    let mut trail = Vec::with_capacity(messages.len());

    for &message in messages {
        let update = engine.advance(displayed, message, &history, &mut *rng);
        displayed = update.displayed;
        trail.push(displayed);
        history.push(message);
    }

    trail
}

#[test]
fn test_conversation_follows_compatible_path() {
    let engine = MoodEngine::default();
    let trail = run_conversation(
        &engine,
        &["やった！！わくわく", "嬉しい", "大好き", "照れる///"],
        &mut always_suppress(),
    );

    assert_eq!(
        trail,
        vec![
            EmotionCategory::Excited,
            EmotionCategory::Happy,
            EmotionCategory::Love,
            EmotionCategory::Shy,
        ]
    );
}

#[test]
fn test_conversation_resists_jarring_jump() {
    let engine = MoodEngine::default();
    let trail = run_conversation(
        &engine,
        &["嬉しい", "ムカつく", "ムカつく"],
        &mut always_suppress(),
    );

    assert!(trail.iter().all(|&emotion| emotion == EmotionCategory::Happy));
}

#[test]
fn test_ambiguous_follow_up_after_sadness() {
    let engine = MoodEngine::default();
    let trail = run_conversation(&engine, &["悲しい", "そっか"], &mut always_suppress());

    // sad -> worried is a compatible edge
    assert_eq!(trail, vec![EmotionCategory::Sad, EmotionCategory::Worried]);
}

#[test]
fn test_advance_reports_decision() {
    let engine = MoodEngine::default();

    let update = engine.advance(
        EmotionCategory::Happy,
        "ムカつく",
        &NO_HISTORY,
        &mut always_allow(),
    );
    assert_eq!(update.decision, TransitionDecision::DampedAllowed);
    assert_eq!(update.displayed, EmotionCategory::Angry);

    let update = engine.advance(
        EmotionCategory::Angry,
        "そうなんだ",
        &NO_HISTORY,
        &mut always_suppress(),
    );
    assert_eq!(update.decision, TransitionDecision::Baseline);
    assert_eq!(update.displayed, EmotionCategory::Normal);
}

#[test]
fn test_displayed_is_always_current_or_proposal() {
    let engine = MoodEngine::default();
    let messages = [
        "嬉しい",
        "ムカつく",
        "悲しい",
        "びっくり",
        "大好き",
        "心配",
        "そうなんだ",
        "わくわく！！",
    ];
    let mut rng = seeded_rng(3);
    let mut displayed = EmotionCategory::Normal;

    for round in 0..50 {
        let message = messages[round % messages.len()];
        let update = engine.advance(displayed, message, &NO_HISTORY, &mut rng);
        assert!(update.displayed == displayed || update.displayed == update.proposal.emotion);
        displayed = update.displayed;
    }
}

#[test]
fn test_tracker_session_with_decay() {
    let engine = MoodEngine::default();
    let mut tracker = engine.tracker();
    let mut rng = always_suppress();

    let proposal = engine.assess("すごく嬉しい！！ありがとう！", &NO_HISTORY);
    tracker.apply(proposal, &mut rng);
    assert_eq!(tracker.current(), EmotionCategory::Happy);
    assert!(tracker.is_intense());

    // Suppressed jump leaves intensity untouched
    let angry = engine.assess("ムカつく", &NO_HISTORY);
    let decision = tracker.apply_with_decision(angry, &mut rng);
    assert!(decision.was_damped());
    assert_eq!(tracker.snapshot(), proposal);

    tracker.decay(Duration::from_secs(120));
    assert_eq!(tracker.current(), EmotionCategory::Happy);
    assert_eq!(tracker.intensity(), proposal.intensity / 2);

    tracker.decay(Duration::from_secs(600));
    assert!(tracker.is_baseline());
}

#[test]
fn test_tracker_reinforcement_delays_fade() {
    let decay = DecayConfig {
        half_life_secs: 60.0,
        neutral_threshold: 20.0,
        reinforcement_boost: 30,
    };
    let mut tracker = DisplayedMoodTracker::new(TransitionSmoother::default(), decay);
    let mut rng = always_suppress();

    tracker.apply(ScoreResult::new(EmotionCategory::Love, 40), &mut rng);
    tracker.decay(Duration::from_secs(60));
    assert_eq!(tracker.intensity(), 20);

    tracker.apply(ScoreResult::new(EmotionCategory::Love, 20), &mut rng);
    assert_eq!(tracker.intensity(), 50);

    tracker.decay(Duration::from_secs(60));
    assert_eq!(tracker.current(), EmotionCategory::Love);
    assert_eq!(tracker.intensity(), 25);
}

#[test]
fn test_preset_trackers_fade_at_different_rates() {
    let calm = MoodEngine::new(&MoodConfig::calm_preset());
    let lively = MoodEngine::new(&MoodConfig::lively_preset());
    let mut calm_tracker = calm.tracker();
    let mut lively_tracker = lively.tracker();
    let proposal = ScoreResult::new(EmotionCategory::Excited, 80);

    calm_tracker.apply(proposal, &mut always_suppress());
    lively_tracker.apply(proposal, &mut always_suppress());
    calm_tracker.decay(Duration::from_secs(90));
    lively_tracker.decay(Duration::from_secs(90));

    assert!(calm_tracker.intensity() > lively_tracker.intensity());
}

#[test]
fn test_engine_tracker_with_unvalidated_decay() {
    let mut config = MoodConfig::default();
    config.decay.half_life_secs = 0.0;
    assert!(config.validate().is_err());

    let engine = MoodEngine::new(&config);
    let mut tracker = engine.tracker();
    tracker.apply(engine.assess("嬉しい", &NO_HISTORY), &mut always_suppress());
    assert_eq!(tracker.current(), EmotionCategory::Happy);

    tracker.decay(Duration::ZERO);
    assert_eq!(tracker.snapshot(), ScoreResult::baseline());
}
