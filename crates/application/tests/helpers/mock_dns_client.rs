#![allow(dead_code)]

use async_trait::async_trait;
use dnsc_application::ports::{DnsClient, ExchangeOutcome};
use dnsc_domain::{DomainError, RawRecord, RecordData, RecordType};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Scripted DnsClient
// ============================================================================

#[derive(Debug, Clone)]
pub enum Reply {
    Answer(Vec<RawRecord>),
    Fail(DomainError),
}

#[derive(Debug, Clone)]
struct Script {
    reply: Reply,
    delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub server: String,
    pub name: String,
    pub record_type: RecordType,
}

/// Answers per server from a fixed script; unscripted servers answer with
/// no records.
#[derive(Clone, Default)]
pub struct ScriptedDnsClient {
    scripts: Arc<RwLock<HashMap<String, Script>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl ScriptedDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn answer(&self, server: &str, records: Vec<RawRecord>) {
        self.script(server, Reply::Answer(records), Duration::ZERO).await;
    }

    pub async fn fail(&self, server: &str, err: DomainError) {
        self.script(server, Reply::Fail(err), Duration::ZERO).await;
    }

    pub async fn script(&self, server: &str, reply: Reply, delay: Duration) {
        self.scripts
            .write()
            .await
            .insert(server.to_string(), Script { reply, delay });
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl DnsClient for ScriptedDnsClient {
    async fn exchange(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        _timeout: Duration,
    ) -> ExchangeOutcome {
        self.calls.write().await.push(RecordedCall {
            server: server.to_string(),
            name: name.to_string(),
            record_type,
        });

        let script = self.scripts.read().await.get(server).cloned();
        let Some(script) = script else {
            return ExchangeOutcome::answered(Vec::new(), Duration::from_millis(1));
        };

        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }

        let rtt = script.delay.max(Duration::from_millis(1));
        match script.reply {
            Reply::Answer(records) => ExchangeOutcome::answered(records, rtt),
            Reply::Fail(err) => ExchangeOutcome::failed(err, rtt),
        }
    }
}

// ============================================================================
// Record builders
// ============================================================================

pub fn a_record(name: &str, ip: Ipv4Addr, ttl: u32) -> RawRecord {
    RawRecord::new(name, ttl, RecordData::A(ip))
}

pub fn cname_record(name: &str, target: &str, ttl: u32) -> RawRecord {
    RawRecord::new(name, ttl, RecordData::CNAME(target.to_string()))
}

pub fn timeout_error(server: &str) -> DomainError {
    DomainError::QueryTimeout {
        server: server.to_string(),
    }
}
