//! Context commands: `infer` and `contextualize`.

use std::fmt;

use clap::Args;
use companion_mood::{EmotionCategory, MoodEngine, TimeOfDay};
use serde::Serialize;
use tracing::info;

use super::emit;

/// Arguments for the infer command.
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Newest message text
    pub text: String,

    /// Prior message, oldest first (repeatable)
    #[arg(long = "history", value_name = "TEXT")]
    pub history: Vec<String>,
}

/// Arguments for the contextualize command.
#[derive(Args, Debug)]
pub struct ContextualizeArgs {
    /// Message text
    pub text: String,

    /// Time of day (morning, afternoon, evening, night); defaults to local time
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContextualizeReport {
    time_of_day: TimeOfDay,
    emotion: EmotionCategory,
}

impl fmt::Display for ContextualizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.emotion, self.time_of_day)
    }
}

pub fn handle_infer(args: InferArgs, engine: &MoodEngine, json: bool) -> anyhow::Result<()> {
    let proposal = engine.assess(&args.text, &args.history);
    info!(
        history = args.history.len(),
        window = engine.config().context.window_size,
        emotion = %proposal.emotion,
        "inferred emotion from context"
    );
    emit(&proposal, json)?;
    Ok(())
}

pub fn handle_contextualize(
    args: ContextualizeArgs,
    engine: &MoodEngine,
    json: bool,
) -> anyhow::Result<()> {
    let time_of_day = match args.time.as_deref() {
        Some(name) => name.parse::<TimeOfDay>()?,
        None => TimeOfDay::now_local(),
    };

    let report = ContextualizeReport {
        time_of_day,
        emotion: engine.contextualize(&args.text, time_of_day),
    };
    info!(%time_of_day, emotion = %report.emotion, "contextualized message");
    emit(&report, json)?;
    Ok(())
}
