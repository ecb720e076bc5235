pub mod decoded;
pub mod raw;
pub mod record_type;

pub use decoded::{decode_records, sort_records, DecodedRecord};
pub use raw::{RawRecord, RecordData};
pub use record_type::RecordType;
