//! Error types for the parts of the crate that can actually fail.
//!
//! Commands against the progress state machine are total and never return
//! errors; bad numeric input is normalized instead. Only configuration loading
//! and text parsing at the edges report failures.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Returned when a string does not name a [`GoalType`](crate::GoalType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown goal type {0:?} (expected \"currency\" or \"elements\")")]
pub struct ParseGoalTypeError(pub String);

/// Returned when a string does not name a supported [`Locale`](crate::Locale).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale {0:?} (expected \"en\" or \"es\")")]
pub struct ParseLocaleError(pub String);

/// Failure to turn a console input line into a [`Command`](crate::Command).
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command {0:?}")]
    UnknownVerb(String),

    #[error("`{verb}` expects an argument")]
    MissingArgument { verb: &'static str },

    #[error("`{verb}` expects a number, got {value:?}")]
    NotANumber { verb: &'static str, value: String },

    #[error(transparent)]
    GoalType(#[from] ParseGoalTypeError),

    #[error(transparent)]
    Locale(#[from] ParseLocaleError),
}
