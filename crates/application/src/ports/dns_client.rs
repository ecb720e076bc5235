use async_trait::async_trait;
use dnsc_domain::{DomainError, RawRecord, RecordType};
use std::time::Duration;

/// What came back from one request/response exchange with a nameserver.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub answers: Result<Vec<RawRecord>, DomainError>,
    /// Elapsed round-trip time, measured whether or not the exchange succeeded.
    pub rtt: Duration,
}

impl ExchangeOutcome {
    pub fn answered(answers: Vec<RawRecord>, rtt: Duration) -> Self {
        Self {
            answers: Ok(answers),
            rtt,
        }
    }

    pub fn failed(err: DomainError, rtt: Duration) -> Self {
        Self {
            answers: Err(err),
            rtt,
        }
    }
}

/// A DNS client able to send one recursive question to one server.
///
/// `server` is the address as configured (`host` or `host:port`), `name` is
/// the fully qualified question name.
#[async_trait]
pub trait DnsClient: Send + Sync {
    async fn exchange(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> ExchangeOutcome;
}
