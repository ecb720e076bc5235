use std::fmt;
use std::time::Duration;

use crate::dns_record::{decode_records, sort_records, DecodedRecord, RawRecord, RecordType};
use crate::errors::DomainError;
use crate::sub_query::SubQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The question could not be built (bad PTR address, unknown keyword)
    QueryConstruction,
    /// Network failure or timeout talking to the server
    Transport,
    /// The server answered but the answer section was empty
    NoRecordsFound,
}

/// Error captured for a single sub-query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub kind: ErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn is_no_records(&self) -> bool {
        self.kind == ErrorKind::NoRecordsFound
    }
}

impl From<DomainError> for QueryError {
    fn from(err: DomainError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one sub-query.
///
/// Exactly one of `answers` (non-empty) or `error` is set once completed.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub server: String,
    /// The logical query, not the SRV-substituted name
    pub query: String,
    /// `None` when the requested keyword never mapped to a record type
    pub requested_type: Option<RecordType>,
    pub answers: Vec<RawRecord>,
    pub error: Option<QueryError>,
    pub response_time: Duration,
}

impl QueryResult {
    pub fn pending(sub_query: &SubQuery) -> Self {
        Self {
            server: sub_query.server.clone(),
            query: sub_query.query.clone(),
            requested_type: Some(sub_query.record_type),
            answers: Vec::new(),
            error: None,
            response_time: Duration::ZERO,
        }
    }

    /// Placeholder for a sub-query that was rejected before dispatch.
    pub fn rejected(
        server: impl Into<String>,
        query: impl Into<String>,
        requested_type: Option<RecordType>,
        err: DomainError,
    ) -> Self {
        Self {
            server: server.into(),
            query: query.into(),
            requested_type,
            answers: Vec::new(),
            error: Some(err.into()),
            response_time: Duration::ZERO,
        }
    }

    /// Completes the result with the records from a successful exchange.
    /// An empty answer section is recorded as `NoRecordsFound`.
    pub fn with_answers(mut self, answers: Vec<RawRecord>, response_time: Duration) -> Self {
        self.response_time = response_time;
        if answers.is_empty() {
            self.error = Some(DomainError::NoRecordsFound.into());
        } else {
            self.answers = answers;
        }
        self
    }

    pub fn with_error(mut self, err: DomainError, response_time: Duration) -> Self {
        self.response_time = response_time;
        self.answers.clear();
        self.error = Some(err.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn requested_type_label(&self) -> &'static str {
        self.requested_type
            .map(|rt| rt.as_str())
            .unwrap_or("UNKNOWN")
    }

    /// Decoded answers, sorted for comparison across servers.
    pub fn records(&self) -> Vec<DecodedRecord> {
        let mut answers = self.answers.clone();
        sort_records(&mut answers);
        decode_records(&answers)
    }
}
