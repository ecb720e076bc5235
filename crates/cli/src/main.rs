//! # dnsc
//!
//! Submits one query to every configured DNS server at once and prints a
//! side-by-side comparison of the answers.

use clap::Parser;
use dnsc_application::ports::DnsClient;
use dnsc_application::services::SummaryRenderer;
use dnsc_application::use_cases::{LookupOutcome, LookupRequest, RunLookupUseCase};
use dnsc_domain::{CliOverrides, Config, LogFormat, ResultsOutput};
use dnsc_infrastructure::dns::HickoryDnsClient;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "dnsc")]
#[command(version)]
#[command(about = "Run a DNS query concurrently against all configured DNS servers")]
struct Cli {
    /// DNS server to submit query against (repeatable, comma separated)
    #[arg(short = 's', long = "dns-server", value_name = "SERVER", value_delimiter = ',')]
    servers: Vec<String>,

    /// Fully-qualified system to lookup
    #[arg(short = 'q', long)]
    query: Option<String>,

    /// DNS query type (A, AAAA, CNAME, MX, NS, PTR, SRV)
    #[arg(short = 't', long = "type", value_name = "TYPE", value_delimiter = ',')]
    query_types: Vec<String>,

    /// SRV protocol keyword (msdcs, kerberos, xmppsrv, xmppclient, sip)
    #[arg(short = 'p', long = "srv-protocol", value_name = "PROTOCOL", value_delimiter = ',')]
    srv_protocols: Vec<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Treat DNS errors as fatal and stop at the first one
    #[arg(long)]
    dns_errors_fatal: bool,

    /// Omit the date/time of the query from the results
    #[arg(long)]
    omit_timestamp: bool,

    /// Results format (single-line, multi-line)
    #[arg(short = 'r', long, value_name = "FORMAT")]
    results_output: Option<ResultsOutput>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, cli, json, discard)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            servers: self.servers.clone(),
            query: self.query.clone(),
            query_types: self.query_types.clone(),
            srv_protocols: self.srv_protocols.clone(),
            timeout: self.timeout,
            dns_errors_fatal: self.dns_errors_fatal,
            omit_timestamp: self.omit_timestamp,
            results_output: self.results_output,
            log_level: self.log_level.clone(),
            log_format: self.log_format,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config_file.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run(&cli, &config));
    // An aborted session may leave exchanges or name resolution in flight.
    runtime.shutdown_background();
    let outcome = outcome?;

    let renderer = SummaryRenderer::new(config.results_output, config.omit_timestamp);
    print!("{}", renderer.render(&outcome.results));
    std::io::stdout().flush()?;

    if outcome.aborted {
        error!(
            received = outcome.results.len(),
            expected = outcome.expected,
            "DNS errors are fatal, query session aborted"
        );
    } else {
        info!(
            results = outcome.results.len(),
            errors = outcome.error_count(),
            "Query session complete"
        );
    }

    Ok(exit_code(&outcome))
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<LookupOutcome> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = cli.config_file.as_deref().unwrap_or("default"),
        servers = config.servers.len(),
        query = %config.query,
        record_types = ?config.query_types,
        srv_protocols = ?config.srv_protocols,
        timeout_secs = config.timeout,
        "Starting dnsc"
    );

    let client: Arc<dyn DnsClient> = Arc::new(HickoryDnsClient::new());
    let lookup = RunLookupUseCase::new(client);
    Ok(lookup.execute(&LookupRequest::from(config)).await?)
}

fn exit_code(outcome: &LookupOutcome) -> ExitCode {
    if outcome.aborted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
