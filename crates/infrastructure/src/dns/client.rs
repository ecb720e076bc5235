use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use async_trait::async_trait;
use dnsc_application::ports::{DnsClient, ExchangeOutcome};
use dnsc_domain::{DomainError, RawRecord, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

const DEFAULT_DNS_PORT: u16 = 53;

/// `DnsClient` backed by hickory-proto messages sent over UDP.
#[derive(Debug, Clone, Default)]
pub struct HickoryDnsClient;

impl HickoryDnsClient {
    pub fn new() -> Self {
        Self
    }

    async fn query(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
        started: Instant,
    ) -> Result<Vec<RawRecord>, DomainError> {
        let (id, message) = MessageBuilder::build_query(name, record_type)?;

        let remaining = timeout.saturating_sub(started.elapsed());
        let server_addr = tokio::time::timeout(remaining, resolve_server_addr(server))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
            })??;

        let transport = UdpTransport::new(server_addr);
        let remaining = timeout.saturating_sub(started.elapsed());
        let response = transport.send(&message, remaining).await?;
        let parsed = ResponseParser::parse_reply(&response.bytes, id)?;

        if parsed.truncated {
            debug!(
                server = %server_addr,
                name = %name,
                record_type = %record_type,
                answers = parsed.answers.len(),
                "UDP reply truncated, using partial answer section"
            );
        }

        debug!(
            server = %server_addr,
            name = %name,
            record_type = %record_type,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            protocol = transport.protocol_name(),
            "Exchange answered"
        );

        Ok(parsed.answers)
    }
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn exchange(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> ExchangeOutcome {
        let started = Instant::now();
        match self.query(server, name, record_type, timeout, started).await {
            Ok(answers) => ExchangeOutcome::answered(answers, started.elapsed()),
            Err(e) => ExchangeOutcome::failed(e, started.elapsed()),
        }
    }
}

/// Turn a configured server into a socket address.
///
/// Accepts `192.0.2.1`, `192.0.2.1:5353`, `2001:db8::1`,
/// `[2001:db8::1]:5353` and host names with or without a port. Without a
/// port, 53 is used.
pub async fn resolve_server_addr(server: &str) -> Result<SocketAddr, DomainError> {
    let server = server.trim();
    if server.is_empty() {
        return Err(DomainError::InvalidServerAddress(server.to_string()));
    }

    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    if let Some(ip) = server
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .and_then(|s| s.parse::<IpAddr>().ok())
    {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    let (host, port) = match server.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| DomainError::InvalidServerAddress(server.to_string()))?;
            (host, port)
        }
        None => (server, DEFAULT_DNS_PORT),
    };

    tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| DomainError::Transport {
            server: server.to_string(),
            reason: e.to_string(),
        })?
        .next()
        .ok_or_else(|| DomainError::Transport {
            server: server.to_string(),
            reason: "host name did not resolve to any address".to_string(),
        })
}
