//! Transition smoothing command.
//!
//! With `--trials 1` (the default) prints a single decision. With more trials
//! it reports how often each outcome was displayed, which makes the damping
//! threshold observable. `--seed` makes either mode reproducible.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::ensure;
use clap::Args;
use companion_mood::{EmotionCategory, MoodEngine, TransitionDecision};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use super::emit;

/// Arguments for the smooth command.
#[derive(Args, Debug)]
pub struct SmoothArgs {
    /// Currently displayed emotion
    pub current: String,

    /// Proposed emotion
    pub target: String,

    /// Seed for the damping draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent decisions to sample
    #[arg(long, default_value = "1")]
    pub trials: u32,
}

#[derive(Debug, Serialize)]
struct SmoothReport {
    current: EmotionCategory,
    target: EmotionCategory,
    compatible: bool,
    damping_threshold: f64,
    trials: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<TransitionDecision>,
    outcomes: BTreeMap<EmotionCategory, u32>,
}

impl fmt::Display for SmoothReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transition: {} -> {}", self.current, self.target)?;
        writeln!(f, "  Compatible: {}", self.compatible)?;
        if let Some(decision) = self.decision {
            write!(
                f,
                "  Decision: {}\n  Displayed: {}",
                decision,
                decision.resolve(self.current, self.target)
            )
        } else {
            writeln!(f, "  Damping threshold: {:.2}", self.damping_threshold)?;
            write!(f, "  Outcomes over {} trials:", self.trials)?;
            for (emotion, count) in &self.outcomes {
                let share = f64::from(*count) / f64::from(self.trials);
                write!(f, "\n    {}: {} ({:.1}%)", emotion, count, share * 100.0)?;
            }
            Ok(())
        }
    }
}

pub fn handle_smooth(args: SmoothArgs, engine: &MoodEngine, json: bool) -> anyhow::Result<()> {
    ensure!(args.trials > 0, "--trials must be at least 1");

    let current: EmotionCategory = args.current.parse()?;
    let target: EmotionCategory = args.target.parse()?;
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let smoother = engine.smoother();
    let mut outcomes = BTreeMap::new();
    let mut last = None;
    for _ in 0..args.trials {
        let decision = smoother.decide(current, target, &mut rng);
        *outcomes.entry(decision.resolve(current, target)).or_insert(0) += 1;
        last = Some(decision);
    }

    let report = SmoothReport {
        current,
        target,
        compatible: smoother.is_compatible(current, target),
        damping_threshold: smoother.damping_threshold(),
        trials: args.trials,
        decision: if args.trials == 1 { last } else { None },
        outcomes,
    };
    info!(%current, %target, trials = args.trials, "sampled transition");
    emit(&report, json)?;
    Ok(())
}
