//! Context and Situational Tests
//!
//! Ambiguous-message resolution and the time-of-day policy

use companion_mood::config::ContextConfig;
use companion_mood::{EmotionCategory, MoodConfig, MoodEngine, TimeOfDay};

const EMPTY: [&str; 0] = [];

fn engine_with_window(window_size: usize) -> MoodEngine {
    MoodEngine::new(&MoodConfig {
        context: ContextConfig { window_size },
        ..Default::default()
    })
}

// =============================================================================
// CONTEXT INFERENCE
// =============================================================================

#[test]
fn test_ambiguous_message_after_happy_run() {
    let engine = MoodEngine::default();
    let history = ["嬉しい", "楽しい", "ありがとう", "悲しい"];
    assert_eq!(
        engine.infer_from_context("どうしよう", &history),
        EmotionCategory::Happy
    );
}

#[test]
fn test_sad_context_reads_as_worry() {
    let engine = MoodEngine::default();
    let history = ["今日は疲れた", "悲しい"];
    assert_eq!(
        engine.infer_from_context("そうなんだ", &history),
        EmotionCategory::Worried
    );
}

#[test]
fn test_other_emotions_in_context_are_ignored() {
    let engine = MoodEngine::default();
    let history = ["ムカつく", "びっくり", "恥ずかしい"];
    assert_eq!(
        engine.infer_from_context("そうなんだ", &history),
        EmotionCategory::Normal
    );
}

#[test]
fn test_empty_history_keeps_own_classification() {
    let engine = MoodEngine::default();
    assert_eq!(
        engine.infer_from_context("そうなんだ", &EMPTY),
        EmotionCategory::Normal
    );
    assert_eq!(
        engine.infer_from_context("悲しい", &EMPTY),
        EmotionCategory::Sad
    );
}

#[test]
fn test_messages_outside_window_are_ignored() {
    let engine = MoodEngine::default();
    let history = ["嬉しい", "はい", "はい", "はい"];
    assert_eq!(
        engine.infer_from_context("そうなんだ", &history),
        EmotionCategory::Normal
    );

    let wide = engine_with_window(4);
    assert_eq!(
        wide.infer_from_context("そうなんだ", &history),
        EmotionCategory::Happy
    );
}

#[test]
fn test_confident_message_overrides_context() {
    let engine = MoodEngine::default();
    let history = ["悲しい", "悲しい", "悲しい"];
    assert_eq!(
        engine.infer_from_context("大好き", &history),
        EmotionCategory::Love
    );
}

#[test]
fn test_owned_history_is_accepted() {
    let engine = MoodEngine::default();
    let history: Vec<String> = vec!["楽しかったね".to_string(), "嬉しい".to_string()];
    assert_eq!(
        engine.infer_from_context("どうしよう", &history),
        EmotionCategory::Happy
    );
}

#[test]
fn test_assess_carries_context_intensity() {
    let engine = MoodEngine::default();

    let proposal = engine.assess("そっか", &["悲しい。。。"]);
    assert_eq!(proposal.emotion, EmotionCategory::Worried);
    assert_eq!(proposal.intensity, 80);

    let neutral = engine.assess("そっか", &["はい"]);
    assert!(neutral.is_baseline());
    assert_eq!(neutral.intensity, 50);
}

// =============================================================================
// SITUATIONAL
// =============================================================================

#[test]
fn test_morning_energy_is_excited() {
    let engine = MoodEngine::default();
    assert_eq!(
        engine.contextualize("早く行こう！", TimeOfDay::Morning),
        EmotionCategory::Excited
    );
}

#[test]
fn test_night_energy_stays_normal() {
    let engine = MoodEngine::default();
    assert_eq!(
        engine.contextualize("早く行こう！", TimeOfDay::Night),
        EmotionCategory::Normal
    );
}

#[test]
fn test_sleepiness_never_escalates() {
    let engine = MoodEngine::default();
    for band in TimeOfDay::ALL {
        assert_eq!(
            engine.contextualize("もう眠いから寝る！", band),
            EmotionCategory::Normal,
            "band {}",
            band
        );
    }
}

#[test]
fn test_confident_result_is_never_changed() {
    let engine = MoodEngine::default();
    for band in TimeOfDay::ALL {
        assert_eq!(
            engine.contextualize("悲しい", band),
            EmotionCategory::Sad,
            "band {}",
            band
        );
    }
}

#[test]
fn test_no_markers_stays_normal() {
    let engine = MoodEngine::default();
    for band in TimeOfDay::ALL {
        assert_eq!(
            engine.contextualize("今日は良い天気ですね", band),
            EmotionCategory::Normal
        );
    }
}

#[test]
fn test_hour_bands_drive_policy() {
    let engine = MoodEngine::default();
    let text = "よし、いこう!";
    assert_eq!(
        engine.contextualize(text, TimeOfDay::from_hour(8)),
        EmotionCategory::Excited
    );
    assert_eq!(
        engine.contextualize(text, TimeOfDay::from_hour(23)),
        EmotionCategory::Normal
    );
    assert_eq!(
        engine.contextualize(text, TimeOfDay::from_hour(3)),
        EmotionCategory::Normal
    );
}
