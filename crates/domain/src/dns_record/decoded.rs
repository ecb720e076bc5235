use super::raw::{RawRecord, RecordData};

const VALUE_UNKNOWN: &str = "type unknown";
const TYPE_UNKNOWN: &str = "UNKNOWN";

/// Display projection of a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    /// Record value such as `smtp1.example.com.` or `192.0.2.10`
    pub value: String,
    /// Type of the record itself, which may differ from the requested type
    pub record_type: &'static str,
    pub ttl: u32,
}

impl From<&RawRecord> for DecodedRecord {
    fn from(record: &RawRecord) -> Self {
        let (value, record_type) = match &record.data {
            RecordData::A(addr) => (addr.to_string(), "A"),
            RecordData::AAAA(addr) => (addr.to_string(), "AAAA"),
            RecordData::CNAME(target) => (target.clone(), "CNAME"),
            RecordData::MX { exchange, .. } => (exchange.clone(), "MX"),
            RecordData::NS(host) => (host.clone(), "NS"),
            RecordData::PTR(target) => (target.clone(), "PTR"),
            RecordData::SRV { target, .. } => (target.clone(), "SRV"),
            RecordData::Unknown { .. } => (VALUE_UNKNOWN.to_string(), TYPE_UNKNOWN),
        };

        Self {
            value,
            record_type,
            ttl: record.ttl,
        }
    }
}

pub fn decode_records(records: &[RawRecord]) -> Vec<DecodedRecord> {
    records.iter().map(DecodedRecord::from).collect()
}

/// Stable ascending sort on the record address. Records without an address
/// (CNAME and friends) sort first so the chain leads into the addresses.
pub fn sort_records(records: &mut [RawRecord]) {
    records.sort_by_key(RawRecord::address);
}
