use anyhow::Context;
use dnsc_domain::{CliOverrides, Config};

/// Load, merge and validate configuration before any network activity.
pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides).context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}
