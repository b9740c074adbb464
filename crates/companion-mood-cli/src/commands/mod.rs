//! CLI command handlers
//!
//! # Modules
//!
//! - `classify`: `score` and `extract`
//! - `context`: `infer` and `contextualize`
//! - `smooth`: transition smoothing and damping sampling

use std::fmt::Display;

use clap::Subcommand;
use companion_mood::{MoodEngine, MoodResult};
use serde::Serialize;
use tracing::error;

pub mod classify;
pub mod context;
pub mod smooth;

#[derive(Subcommand)]
pub enum Commands {
    /// Dominant emotion and intensity of a message
    ///
    /// # Examples
    ///
    /// ```bash
    /// companion-mood score "すごく嬉しい！！ありがとう！"
    /// ```
    Score(classify::ScoreArgs),

    /// Every emotion present in a message
    Extract(classify::ExtractArgs),

    /// Emotion of a message, resolved from prior messages when ambiguous
    ///
    /// # Examples
    ///
    /// ```bash
    /// companion-mood infer "どうしよう" --history 嬉しい --history 楽しい
    /// ```
    Infer(context::InferArgs),

    /// Classification with the time-of-day policy applied
    Contextualize(context::ContextualizeArgs),

    /// Next displayed emotion for a transition
    ///
    /// # Examples
    ///
    /// ```bash
    /// # One decision
    /// companion-mood smooth happy angry
    ///
    /// # Observed damping rate over many reproducible trials
    /// companion-mood smooth happy angry --trials 10000 --seed 42
    /// ```
    Smooth(smooth::SmoothArgs),
}

/// Dispatch a command and map its outcome to an exit code.
pub fn handle_command(command: Commands, engine: &MoodEngine, json: bool) -> i32 {
    let result = match command {
        Commands::Score(args) => classify::handle_score(args, engine, json),
        Commands::Extract(args) => classify::handle_extract(args, engine, json),
        Commands::Infer(args) => context::handle_infer(args, engine, json),
        Commands::Contextualize(args) => context::handle_contextualize(args, engine, json),
        Commands::Smooth(args) => smooth::handle_smooth(args, engine, json),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Print `value` as pretty JSON or through its `Display` impl.
pub(crate) fn emit<T: Serialize + Display>(value: &T, json: bool) -> MoodResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}
