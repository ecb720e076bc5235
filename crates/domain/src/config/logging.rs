use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Accepted log levels, most to least verbose.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Output format for log messages (written to stderr)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-friendly full output
    #[default]
    Text,
    /// Compact output without targets
    Cli,
    /// One JSON object per event
    Json,
    /// No log output at all
    Discard,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Cli => "cli",
            LogFormat::Json => "json",
            LogFormat::Discard => "discard",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "cli" => Ok(LogFormat::Cli),
            "json" => Ok(LogFormat::Json),
            "discard" => Ok(LogFormat::Discard),
            _ => Err(ConfigError::Validation(format!(
                "invalid option {:?} provided for log format",
                s
            ))),
        }
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
