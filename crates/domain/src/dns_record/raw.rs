use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Type-specific payload of an answer record.
///
/// Closed set: anything the DNS client cannot map lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    MX {
        preference: u16,
        exchange: String,
    },
    NS(String),
    PTR(String),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Unknown {
        type_code: u16,
    },
}

/// An answer record as returned by the DNS client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Owner name of the record
    pub name: String,
    /// Time to live in seconds
    pub ttl: u32,
    pub data: RecordData,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Address carried by A/AAAA records, `None` for everything else.
    pub fn address(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::A(v4) => Some(IpAddr::V4(v4)),
            RecordData::AAAA(v6) => Some(IpAddr::V6(v6)),
            _ => None,
        }
    }
}
