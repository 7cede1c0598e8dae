//! Runtime configuration read from the environment.
//!
//! # Responsibility
//! - Resolve log level, log directory and seeding behaviour for front-ends.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are errors.
//! - `log_dir`, when present, is absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Log level override (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "AGENDA_LOG_LEVEL";
/// Absolute directory for rolling log files; unset disables file logging.
pub const ENV_LOG_DIR: &str = "AGENDA_LOG_DIR";
/// Whether to load the example contacts at startup (default `true`).
pub const ENV_SEED_EXAMPLES: &str = "AGENDA_SEED_EXAMPLES";

/// Front-end startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    pub seed_examples: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_examples: true,
        }
    }
}

/// Invalid environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL}=`{value}` is unsupported; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidBool { key, value } => {
                write!(f, "{key}=`{value}` is not a boolean; expected true|false|1|0|yes|no")
            }
        }
    }
}

impl Error for ConfigError {}

impl AgendaConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level =
                normalize_level(&raw).map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?;
        }

        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(raw));
            }
            config.log_dir = Some(path);
        }

        if let Some(raw) = non_blank(lookup(ENV_SEED_EXAMPLES)) {
            config.seed_examples = parse_bool(ENV_SEED_EXAMPLES, &raw)?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
