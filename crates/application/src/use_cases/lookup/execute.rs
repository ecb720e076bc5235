use crate::ports::DnsClient;
use dnsc_domain::{ptr_query_name, QueryResult, RecordType, SubQuery};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Runs one sub-query against one server. Never fails: every outcome is
/// folded into the returned `QueryResult`.
pub struct ExecuteSubQueryUseCase {
    client: Arc<dyn DnsClient>,
    timeout: Duration,
}

impl ExecuteSubQueryUseCase {
    pub fn new(client: Arc<dyn DnsClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn execute(&self, sub_query: &SubQuery) -> QueryResult {
        let result = QueryResult::pending(sub_query);

        let name = if sub_query.record_type == RecordType::PTR {
            match ptr_query_name(&sub_query.name) {
                Ok(name) => name,
                Err(e) => {
                    debug!(server = %sub_query.server, query = %sub_query.query, error = %e, "Cannot build reverse lookup name");
                    return result.with_error(e, Duration::ZERO);
                }
            }
        } else {
            fqdn(&sub_query.name)
        };

        let outcome = self
            .client
            .exchange(&sub_query.server, &name, sub_query.record_type, self.timeout)
            .await;

        match outcome.answers {
            Ok(answers) => {
                debug!(
                    server = %sub_query.server,
                    name = %name,
                    record_type = %sub_query.record_type,
                    answers = answers.len(),
                    rtt_ms = outcome.rtt.as_millis() as u64,
                    "Exchange completed"
                );
                result.with_answers(answers, outcome.rtt)
            }
            Err(e) => {
                debug!(
                    server = %sub_query.server,
                    name = %name,
                    record_type = %sub_query.record_type,
                    error = %e,
                    "Exchange failed"
                );
                result.with_error(e, outcome.rtt)
            }
        }
    }
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
