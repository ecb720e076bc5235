use dnsc_domain::{Config, LogFormat};
use tracing::info;

/// Install the global subscriber. Logs always go to stderr so stdout only
/// carries the results table.
pub fn init_logging(config: &Config) {
    let log_level = config.log_level.parse().unwrap_or(tracing::Level::INFO);

    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_max_level(log_level)
            .with_ansi(true)
            .init(),
        LogFormat::Cli => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .compact()
            .with_target(false)
            .without_time()
            .with_max_level(log_level)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .json()
            .with_max_level(log_level)
            .init(),
        LogFormat::Discard => return,
    }

    info!(
        level = %config.log_level,
        format = %config.log_format,
        "Logging initialized"
    );
}
