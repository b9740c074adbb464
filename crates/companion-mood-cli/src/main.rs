//! Companion Mood CLI
//!
//! Inspect the mood engine from the command line.
//!
//! # Commands
//!
//! - `score`: Dominant emotion and intensity of a message
//! - `extract`: Every emotion present in a message
//! - `infer`: Emotion of a message resolved against prior messages
//! - `contextualize`: Classification with the time-of-day policy applied
//! - `smooth`: Next displayed emotion for a transition, optionally sampled
//!
//! Exit code 0 on success, 1 on configuration or argument errors.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use companion_mood::{MoodConfig, MoodEngine};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Companion Mood - emotion and mood inference for chat messages
#[derive(Parser)]
#[command(name = "companion-mood")]
#[command(author = "Companion Mood Team")]
#[command(version)]
#[command(about = "Classify chat messages and smooth displayed emotion transitions")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML); defaults to ./config and the environment
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON instead of human-readable
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: commands::Commands,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MoodConfig> {
    match path {
        Some(path) => MoodConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => MoodConfig::load().context("loading configuration"),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    // Setup logging based on verbosity; the configured level applies at -v0
    let default_level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let engine = MoodEngine::new(&config);
    let exit_code = commands::handle_command(cli.command, &engine, cli.json);

    std::process::exit(exit_code);
}
