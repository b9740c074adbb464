//! Transition Tests
//!
//! Smoothing laws over the public API and damping statistics

use companion_mood::transition::{compatible_targets, is_compatible};
use companion_mood::{EmotionCategory, MoodConfig, TransitionDecision, TransitionSmoother};

use super::helpers::{always_allow, always_suppress, seeded_rng};

use companion_mood::EmotionCategory::*;

#[test]
fn test_leaving_and_entering_baseline() {
    let smoother = TransitionSmoother::with_threshold(0.0);
    let mut rng = always_suppress();
    for category in EmotionCategory::SCORED {
        assert_eq!(smoother.smooth(Normal, category, &mut rng), category);
        assert_eq!(smoother.smooth(category, Normal, &mut rng), Normal);
    }
}

#[test]
fn test_compatible_moves_ignore_draw() {
    let smoother = TransitionSmoother::with_threshold(0.0);
    let mut rng = always_suppress();
    for from in EmotionCategory::SCORED {
        for &to in compatible_targets(from) {
            assert_eq!(smoother.smooth(from, to, &mut rng), to, "{} -> {}", from, to);
        }
    }
}

#[test]
fn test_surprised_and_excited_never_list_baseline() {
    // Reaching normal from these is still unconditional through the baseline rule.
    assert!(!is_compatible(Surprised, Normal));
    assert!(!is_compatible(Excited, Normal));

    let smoother = TransitionSmoother::default();
    let mut rng = always_suppress();
    assert_eq!(smoother.smooth(Surprised, Normal, &mut rng), Normal);
    assert_eq!(smoother.smooth(Excited, Normal, &mut rng), Normal);
}

#[test]
fn test_forced_draws_decide_incompatible_pairs() {
    let smoother = TransitionSmoother::default();
    let pairs = [(Happy, Angry), (Sad, Happy), (Worried, Excited), (Angry, Love)];

    for (from, to) in pairs {
        assert_eq!(
            smoother.decide(from, to, &mut always_allow()),
            TransitionDecision::DampedAllowed
        );
        assert_eq!(
            smoother.decide(from, to, &mut always_suppress()),
            TransitionDecision::DampedSuppressed
        );
    }
}

#[test]
fn test_damping_rate_matches_threshold() {
    let trials = 20_000;
    let pairs = [(Happy, Angry), (Shy, Sad), (Excited, Worried)];

    for threshold in [0.1, 0.3, 0.5] {
        let smoother = TransitionSmoother::with_threshold(threshold);
        for (index, (from, to)) in pairs.iter().enumerate() {
            let mut rng = seeded_rng(1_000 + index as u64);
            let allowed = (0..trials)
                .filter(|_| smoother.smooth(*from, *to, &mut rng) == *to)
                .count();
            let fraction = allowed as f64 / trials as f64;

            assert!(
                (fraction - threshold).abs() < 0.02,
                "{} -> {} at {}: got {:.3}",
                from,
                to,
                threshold,
                fraction
            );
        }
    }
}

#[test]
fn test_same_seed_reproduces_sequence() {
    let smoother = TransitionSmoother::default();
    let run = |seed| {
        let mut rng = seeded_rng(seed);
        (0..64)
            .map(|_| smoother.smooth(Love, Angry, &mut rng))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn test_presets_configure_threshold() {
    let calm = TransitionSmoother::new(&MoodConfig::calm_preset().transition);
    let lively = TransitionSmoother::new(&MoodConfig::lively_preset().transition);
    assert!(calm.damping_threshold() < lively.damping_threshold());
}
