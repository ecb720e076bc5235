//! Configuration module for dnsc
//!
//! - `root`: Main configuration, file discovery and CLI overrides
//! - `output`: Results summary layout
//! - `logging`: Log level and format
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LOG_LEVELS};
pub use output::ResultsOutput;
pub use root::{CliOverrides, Config};
