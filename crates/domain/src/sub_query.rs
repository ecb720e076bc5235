use crate::dns_record::RecordType;

/// One concrete lookup: a single record type against a single server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubQuery {
    /// Nameserver, optionally with an explicit port
    pub server: String,
    /// The logical query the user asked for
    pub query: String,
    /// Name placed in the question section; differs from `query` for SRV
    /// protocol expansion
    pub name: String,
    pub record_type: RecordType,
}

impl SubQuery {
    pub fn new(
        server: impl Into<String>,
        query: impl Into<String>,
        record_type: RecordType,
    ) -> Self {
        let query = query.into();
        Self {
            server: server.into(),
            name: query.clone(),
            query,
            record_type,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
