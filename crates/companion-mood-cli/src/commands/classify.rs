//! Classification commands: `score` and `extract`.

use clap::Args;
use companion_mood::MoodEngine;
use tracing::info;

use super::emit;

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Message text
    pub text: String,
}

/// Arguments for the extract command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Message text
    pub text: String,
}

pub fn handle_score(args: ScoreArgs, engine: &MoodEngine, json: bool) -> anyhow::Result<()> {
    let result = engine.score(&args.text);
    info!(emotion = %result.emotion, intensity = result.intensity, "scored message");
    emit(&result, json)?;
    Ok(())
}

pub fn handle_extract(args: ExtractArgs, engine: &MoodEngine, json: bool) -> anyhow::Result<()> {
    let emotions = engine.extract(&args.text);
    info!(count = emotions.len(), "extracted emotions");
    emit(&emotions, json)?;
    Ok(())
}
