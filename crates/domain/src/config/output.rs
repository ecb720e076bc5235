use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Layout of the results summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultsOutput {
    /// One row per query result, records comma-separated
    SingleLine,
    /// One row per record
    #[default]
    MultiLine,
}

impl ResultsOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultsOutput::SingleLine => "single-line",
            ResultsOutput::MultiLine => "multi-line",
        }
    }
}

impl fmt::Display for ResultsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultsOutput {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-line" => Ok(ResultsOutput::SingleLine),
            "multi-line" => Ok(ResultsOutput::MultiLine),
            _ => Err(ConfigError::Validation(format!(
                "invalid option {:?} provided for results output",
                s
            ))),
        }
    }
}
