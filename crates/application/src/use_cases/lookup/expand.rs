use dnsc_domain::{srv_query_name, Config, DomainError, QueryResult, RecordType, SubQuery};
use std::time::Duration;
use tracing::debug;

/// Everything the engine needs to run one lookup session.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub query: String,
    pub servers: Vec<String>,
    pub query_types: Vec<String>,
    pub srv_protocols: Vec<String>,
    pub timeout: Duration,
    pub errors_fatal: bool,
}

impl From<&Config> for LookupRequest {
    fn from(config: &Config) -> Self {
        Self {
            query: config.query.clone(),
            servers: config.servers.clone(),
            query_types: config.query_types.clone(),
            srv_protocols: config.srv_protocols.clone(),
            timeout: config.timeout(),
            errors_fatal: config.dns_errors_fatal,
        }
    }
}

/// One unit of work produced by the expander.
#[derive(Debug, Clone)]
pub enum PlannedQuery {
    /// Sent to a server by the executor.
    Dispatch(SubQuery),
    /// Could not be built; goes straight to the collector as an error row.
    Rejected(QueryResult),
}

#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub queries: Vec<PlannedQuery>,
    /// Number of results the collector waits for in tolerant mode.
    pub expected: usize,
}

impl QueryPlan {
    pub fn sub_queries(&self) -> impl Iterator<Item = &SubQuery> {
        self.queries.iter().filter_map(|planned| match planned {
            PlannedQuery::Dispatch(sub_query) => Some(sub_query),
            PlannedQuery::Rejected(_) => None,
        })
    }
}

/// Expands a logical query into the full server × type (× SRV protocol) set.
///
/// Unknown SRV protocol keywords fail the whole expansion before anything is
/// dispatched. Unknown record type keywords become rejected placeholders so
/// the expected count still reconciles.
pub fn expand_query(request: &LookupRequest) -> Result<QueryPlan, DomainError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(DomainError::InvalidQuery("query not provided".to_string()));
    }

    let srv_names = request
        .srv_protocols
        .iter()
        .map(|protocol| srv_query_name(protocol, query))
        .collect::<Result<Vec<_>, _>>()?;

    let keywords = dedup_types(&request.query_types, !srv_names.is_empty());
    let type_count = keywords.len();
    let srv_expanded = !srv_names.is_empty();

    let mut queries = Vec::new();
    for server in &request.servers {
        for keyword in &keywords {
            match keyword.parse::<RecordType>() {
                Ok(RecordType::SRV) if srv_expanded => {
                    for name in &srv_names {
                        queries.push(PlannedQuery::Dispatch(
                            SubQuery::new(server.as_str(), query, RecordType::SRV)
                                .with_name(name.as_str()),
                        ));
                    }
                }
                Ok(record_type) => {
                    queries.push(PlannedQuery::Dispatch(SubQuery::new(
                        server.as_str(),
                        query,
                        record_type,
                    )));
                }
                Err(err) => {
                    debug!(server = %server, keyword = %keyword, "Rejecting unsupported record type");
                    queries.push(PlannedQuery::Rejected(QueryResult::rejected(
                        server.as_str(),
                        query,
                        None,
                        err,
                    )));
                }
            }
        }
    }

    let expected = expected_count(request.servers.len(), type_count, srv_names.len());
    debug_assert_eq!(expected, queries.len());
    debug!(
        query = %query,
        servers = request.servers.len(),
        record_types = type_count,
        srv_protocols = srv_names.len(),
        expected,
        "Expanded query"
    );

    Ok(QueryPlan { queries, expected })
}

/// Case-insensitive dedupe preserving first occurrence. SRV is appended when
/// SRV protocols were requested without it.
fn dedup_types(types: &[String], needs_srv: bool) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(types.len() + 1);
    for keyword in types {
        let keyword = keyword.trim();
        if !keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            keywords.push(keyword.to_string());
        }
    }

    let srv = RecordType::SRV.as_str();
    if needs_srv && !keywords.iter().any(|k| k.eq_ignore_ascii_case(srv)) {
        keywords.push(srv.to_string());
    }
    keywords
}

fn expected_count(servers: usize, record_types: usize, srv_protocols: usize) -> usize {
    if srv_protocols > 0 {
        // SRV itself is replaced by one sub-query per protocol
        (record_types - 1) * servers + srv_protocols * servers
    } else {
        record_types * servers
    }
}
