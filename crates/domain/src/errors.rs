use thiserror::Error;

use crate::query_result::ErrorKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid IP address for reverse lookup: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Unsupported SRV protocol keyword specified: {0}")]
    UnknownSrvProtocol(String),

    #[error("Missing SRV protocol keyword")]
    MissingSrvProtocol,

    #[error("Invalid DNS server address: {0}")]
    InvalidServerAddress(String),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("no records found for query")]
    NoRecordsFound,
}

impl DomainError {
    /// Classifies the error for per-sub-query reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidQuery(_)
            | DomainError::InvalidIpAddress(_)
            | DomainError::UnsupportedRecordType(_)
            | DomainError::UnknownSrvProtocol(_)
            | DomainError::MissingSrvProtocol => ErrorKind::QueryConstruction,

            DomainError::InvalidServerAddress(_)
            | DomainError::QueryTimeout { .. }
            | DomainError::Transport { .. }
            | DomainError::InvalidDnsResponse(_) => ErrorKind::Transport,

            DomainError::NoRecordsFound => ErrorKind::NoRecordsFound,
        }
    }
}
