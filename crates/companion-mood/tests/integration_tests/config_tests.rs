//! Configuration Tests
//!
//! Layered loading from files and the environment

use std::path::Path;
use std::sync::Mutex;

use companion_mood::config::{ENV_SELECTOR, MoodConfig};
use companion_mood::MoodEngine;

/// Environment variables are process-global; tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const THRESHOLD_VAR: &str = "COMPANION_MOOD__TRANSITION__DAMPING_THRESHOLD";
const WINDOW_VAR: &str = "COMPANION_MOOD__CONTEXT__WINDOW_SIZE";

fn write_config(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(format!("{}.toml", name)), content).expect("write config file");
}

#[test]
fn test_environment_overrides_files() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "default", "[transition]\ndamping_threshold = 0.2\n");

    std::env::set_var(THRESHOLD_VAR, "0.7");
    std::env::set_var(WINDOW_VAR, "5");
    let result = MoodConfig::load_from_dir(dir.path());
    std::env::remove_var(THRESHOLD_VAR);
    std::env::remove_var(WINDOW_VAR);

    let config = result.unwrap();
    assert_eq!(config.transition.damping_threshold, 0.7);
    assert_eq!(config.context.window_size, 5);
}

#[test]
fn test_environment_file_layers_over_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "default",
        "[context]\nwindow_size = 4\n\n[transition]\ndamping_threshold = 0.2\n",
    );
    write_config(dir.path(), "staging", "[transition]\ndamping_threshold = 0.4\n");

    std::env::set_var(ENV_SELECTOR, "staging");
    let result = MoodConfig::load_from_dir(dir.path());
    std::env::remove_var(ENV_SELECTOR);

    let config = result.unwrap();
    assert_eq!(config.context.window_size, 4);
    assert_eq!(config.transition.damping_threshold, 0.4);
}

#[test]
fn test_invalid_environment_value_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();

    std::env::set_var(WINDOW_VAR, "0");
    let result = MoodConfig::load_from_dir(dir.path());
    std::env::remove_var(WINDOW_VAR);

    assert!(result.unwrap_err().is_config_error());
}

#[test]
fn test_preset_file_drives_engine() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let preset = MoodConfig::calm_preset();
    write_config(dir.path(), "default", &toml::to_string(&preset).unwrap());

    let loaded = MoodConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(loaded, preset);

    let engine = MoodEngine::new(&loaded);
    assert_eq!(
        engine.smoother().damping_threshold(),
        preset.transition.damping_threshold
    );
}

#[test]
fn test_from_file_reads_single_file() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "mood",
        "[decay]\nhalf_life_secs = 45.0\nreinforcement_boost = 10\n",
    );

    let config = MoodConfig::from_file(&dir.path().join("mood.toml")).unwrap();
    assert_eq!(config.decay.half_life_secs, 45.0);
    assert_eq!(config.decay.reinforcement_boost, 10);
    assert_eq!(config.decay.neutral_threshold, 10.0);
}
