//! Session configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment overrides. Values go through the same normalization as user
//! commands, so a configured goal of `0` still starts the session at `1`.
//!
//! ```toml
//! goal = 250
//! goal_type = "elements"
//! locale = "es"
//!
//! [animation]
//! add_pulse_ms = 400
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::animation::AnimationTimings;
use crate::error::ConfigError;
use crate::i18n::Locale;
use crate::model::{GoalType, DEFAULT_GOAL};

pub const ENV_GOAL: &str = "PROGRESS_GOAL";
pub const ENV_GOAL_TYPE: &str = "PROGRESS_GOAL_TYPE";
pub const ENV_LOCALE: &str = "PROGRESS_LOCALE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub goal: f64,
    pub goal_type: GoalType,
    pub locale: Locale,
    pub animation: AnimationTimings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            goal_type: GoalType::default(),
            locale: Locale::default(),
            animation: AnimationTimings::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Apply `PROGRESS_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any key/value source. Unset keys are skipped;
    /// present but unparsable values are an error.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_GOAL) {
            self.goal = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_GOAL,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_GOAL_TYPE) {
            self.goal_type = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_GOAL_TYPE,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_LOCALE) {
            self.locale = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_LOCALE,
                value: value.clone(),
            })?;
        }
        Ok(self)
    }
}
