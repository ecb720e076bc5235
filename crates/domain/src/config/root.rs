use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::ConfigError;
use super::logging::{default_log_level, LogFormat, LOG_LEVELS};
use super::output::ResultsOutput;
use crate::dns_record::RecordType;
use crate::srv_protocol::srv_template;

const APP_NAME: &str = "dnsc";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure for dnsc
///
/// Keys mirror the TOML file layout, e.g.:
///
/// ```toml
/// dns_servers = ["192.0.2.53", "198.51.100.53"]
/// dns_query_types = ["a", "aaaa"]
/// results_output = "single-line"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Nameservers to query; an explicit `:port` is honoured
    #[serde(default, rename = "dns_servers")]
    pub servers: Vec<String>,

    /// The logical query submitted to every server
    #[serde(default)]
    pub query: String,

    /// Record type keywords (default: "A")
    #[serde(default = "default_query_types", rename = "dns_query_types")]
    pub query_types: Vec<String>,

    /// SRV protocol keywords expanded against the query
    #[serde(default, rename = "dns_srv_protocols")]
    pub srv_protocols: Vec<String>,

    /// Per-query timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Abort the whole session on the first failed sub-query
    #[serde(default)]
    pub dns_errors_fatal: bool,

    /// Leave the "Query Performed" line out of the summary
    #[serde(default)]
    pub omit_timestamp: bool,

    #[serde(default)]
    pub results_output: ResultsOutput,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            query: String::new(),
            query_types: default_query_types(),
            srv_protocols: Vec::new(),
            timeout: default_timeout(),
            dns_errors_fatal: false,
            omit_timestamp: false,
            results_output: ResultsOutput::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_query_types() -> Vec<String> {
    vec![RecordType::A.as_str().to_string()]
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path (load failure is an error)
    /// 2. config.toml next to the executable
    /// 3. dnsc/config.toml in the user config directory
    /// 4. Default configuration
    ///
    /// CLI overrides are applied on top of whichever source was used.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::discover()?,
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    fn discover() -> Result<Self, ConfigError> {
        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                debug!(config_file = %candidate.display(), "Config file found");
                return Self::from_file(&candidate);
            }
            debug!(config_file = %candidate.display(), "Config file not found");
        }

        debug!("No config file found, relying on flags and defaults");
        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);

        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        let user_config_dir = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));
        if let Some(dir) = user_config_dir {
            paths.push(dir.join(APP_NAME).join(CONFIG_FILE_NAME));
        }

        paths
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.servers = overrides.servers;
        }
        if let Some(query) = overrides.query {
            self.query = query;
        }
        if !overrides.query_types.is_empty() {
            self.query_types = overrides.query_types;
        }
        if !overrides.srv_protocols.is_empty() {
            self.srv_protocols = overrides.srv_protocols;
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
        if overrides.dns_errors_fatal {
            self.dns_errors_fatal = true;
        }
        if overrides.omit_timestamp {
            self.omit_timestamp = true;
        }
        if let Some(output) = overrides.results_output {
            self.results_output = output;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
    }

    /// Drop duplicate entries and make sure SRV is requested whenever SRV
    /// protocols were given.
    pub fn normalize(&mut self) {
        dedup_by_key(&mut self.servers, |s| s.trim().to_string());
        dedup_by_key(&mut self.query_types, |t| t.trim().to_ascii_uppercase());
        dedup_by_key(&mut self.srv_protocols, |p| p.trim().to_ascii_lowercase());

        let has_srv = self
            .query_types
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(RecordType::SRV.as_str()));
        if !self.srv_protocols.is_empty() && !has_srv {
            self.query_types.push(RecordType::SRV.as_str().to_string());
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servers.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "one or more DNS servers not provided".to_string(),
            ));
        }

        if self.query.trim().is_empty() {
            return Err(ConfigError::Validation("query not provided".to_string()));
        }

        for query_type in &self.query_types {
            query_type.parse::<RecordType>().map_err(|_| {
                ConfigError::Validation(format!(
                    "invalid option {:?} provided for request type",
                    query_type
                ))
            })?;
        }

        for protocol in &self.srv_protocols {
            srv_template(protocol).map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        if self.timeout == 0 {
            return Err(ConfigError::Validation(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid option {:?} provided for log level",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn dedup_by_key<F>(values: &mut Vec<String>, key: F)
where
    F: Fn(&str) -> String,
{
    let mut seen = Vec::with_capacity(values.len());
    values.retain(|v| {
        let k = key(v.as_str());
        if seen.contains(&k) {
            false
        } else {
            seen.push(k);
            true
        }
    });
}

/// Command-line overrides for configuration
///
/// Empty lists and `None` leave the file value untouched; boolean switches
/// can only turn a setting on.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub query: Option<String>,
    pub query_types: Vec<String>,
    pub srv_protocols: Vec<String>,
    pub timeout: Option<u64>,
    pub dns_errors_fatal: bool,
    pub omit_timestamp: bool,
    pub results_output: Option<ResultsOutput>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
