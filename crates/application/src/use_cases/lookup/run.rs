use super::execute::ExecuteSubQueryUseCase;
use super::expand::{expand_query, LookupRequest, PlannedQuery};
use crate::ports::DnsClient;
use dnsc_domain::{DomainError, QueryResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Results gathered by one lookup session, sorted by server.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub results: Vec<QueryResult>,
    /// How many results the session was waiting for.
    pub expected: usize,
    /// Collection stopped at the first error under the fatal policy.
    pub aborted: bool,
}

impl LookupOutcome {
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }
}

/// Fans a logical query out to every server and collects the results.
///
/// One task is spawned per sub-query; each writes its result onto a channel
/// sized to the expected count, so no producer ever waits on the collector.
/// Under the fatal policy the collector stops at the first error and any
/// tasks still in flight are left to finish on their own.
pub struct RunLookupUseCase {
    client: Arc<dyn DnsClient>,
}

impl RunLookupUseCase {
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupOutcome, DomainError> {
        let plan = expand_query(request)?;
        let expected = plan.expected;

        let (tx, rx) = mpsc::channel(expected.max(1));
        let executor = Arc::new(ExecuteSubQueryUseCase::new(
            Arc::clone(&self.client),
            request.timeout,
        ));

        for planned in plan.queries {
            let tx = tx.clone();
            match planned {
                PlannedQuery::Dispatch(sub_query) => {
                    let executor = Arc::clone(&executor);
                    tokio::spawn(async move {
                        let result = executor.execute(&sub_query).await;
                        // receiver is gone once a fatal error ended collection
                        let _ = tx.send(result).await;
                    });
                }
                PlannedQuery::Rejected(result) => {
                    let _ = tx.try_send(result);
                }
            }
        }
        drop(tx);

        let (mut results, aborted) = collect(rx, expected, request.errors_fatal).await;
        results.sort_by(|a, b| a.server.cmp(&b.server));

        Ok(LookupOutcome {
            results,
            expected,
            aborted,
        })
    }
}

async fn collect(
    mut rx: mpsc::Receiver<QueryResult>,
    expected: usize,
    errors_fatal: bool,
) -> (Vec<QueryResult>, bool) {
    let mut results = Vec::with_capacity(expected);

    while results.len() < expected {
        let Some(result) = rx.recv().await else {
            warn!(
                received = results.len(),
                expected, "Result channel closed before all sub-queries reported"
            );
            break;
        };

        let failed = result.is_error();
        if let Some(err) = &result.error {
            debug!(server = %result.server, query = %result.query, error = %err, "Sub-query returned an error");
        }
        results.push(result);

        if failed && errors_fatal {
            warn!(
                received = results.len(),
                expected, "DNS error encountered, abandoning remaining queries"
            );
            return (results, true);
        }
    }

    debug!(received = results.len(), expected, "Collection complete");
    (results, false)
}
