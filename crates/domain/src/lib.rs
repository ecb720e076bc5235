//! dnsc Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_result;
pub mod reverse;
pub mod srv_protocol;
pub mod sub_query;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, ResultsOutput};
pub use dns_record::{DecodedRecord, RawRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use query_result::{ErrorKind, QueryError, QueryResult};
pub use reverse::{ip_from_ptr_name, ptr_query_name};
pub use srv_protocol::{srv_query_name, srv_template, SRV_PROTOCOLS};
pub use sub_query::SubQuery;
