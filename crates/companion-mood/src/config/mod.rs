//! Mood engine configuration types.
//!
//! The two behavioural policy constants of the engine, the transition damping
//! threshold and the context window size, live here with their documented
//! defaults instead of being hard-coded. Decay settings for the optional
//! displayed-mood tracker and a default log filter complete the set.
//!
//! # Loading
//!
//! [`MoodConfig::load`] merges, in order:
//! 1. `config/default.toml`
//! 2. `config/{COMPANION_MOOD_ENV}.toml` (default environment: `development`)
//! 3. Environment variables with the `COMPANION_MOOD__` prefix, e.g.
//!    `COMPANION_MOOD__TRANSITION__DAMPING_THRESHOLD=0.5`
//!
//! Every source is optional; missing values fall back to defaults.

mod context;
mod decay;
mod logging;
mod transition;


pub use self::context::ContextConfig;
pub use self::decay::DecayConfig;
pub use self::logging::LoggingConfig;
pub use self::transition::TransitionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// Environment variable selecting the environment-specific config file.
pub const ENV_SELECTOR: &str = "COMPANION_MOOD_ENV";

/// Prefix for configuration overrides from the environment.
pub const ENV_PREFIX: &str = "COMPANION_MOOD";

/// Top-level mood engine configuration.
///
/// # Example
///
/// ```
/// use companion_mood::config::MoodConfig;
///
/// let config = MoodConfig::default();
/// assert_eq!(config.context.window_size, 3);
/// assert!((config.transition.damping_threshold - 0.3).abs() < f64::EPSILON);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Context inference settings.
    pub context: ContextConfig,

    /// Transition smoothing settings.
    pub transition: TransitionConfig,

    /// Displayed-mood decay settings.
    pub decay: DecayConfig,

    /// Log filter for hosts.
    pub logging: LoggingConfig,
}

impl MoodConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A steadier character: incompatible jumps are rare and moods linger.
    pub fn calm_preset() -> Self {
        Self {
            transition: TransitionConfig {
                damping_threshold: 0.1,
            },
            decay: DecayConfig::slow(),
            ..Default::default()
        }
    }

    /// A volatile character: incompatible jumps pass more often and fade fast.
    pub fn lively_preset() -> Self {
        Self {
            transition: TransitionConfig {
                damping_threshold: 0.5,
            },
            decay: DecayConfig::fast(),
            ..Default::default()
        }
    }

    /// Load configuration from `./config` and the environment.
    pub fn load() -> MoodResult<Self> {
        Self::load_from_dir(Path::new("config"))
    }

    /// Load configuration from `dir` and the environment.
    ///
    /// See the module documentation for the merge order.
    pub fn load_from_dir(dir: &Path) -> MoodResult<Self> {
        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: MoodConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(env = %env, dir = %dir.display(), "loaded mood configuration");
        Ok(config)
    }

    /// Load configuration from a single TOML file.
    pub fn from_file(path: &Path) -> MoodResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MoodError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: MoodConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section, returning the first failure.
    pub fn validate(&self) -> MoodResult<()> {
        self.context.validate()?;
        self.transition.validate()?;
        self.decay.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
