mod summary;
mod table;

pub use summary::{format_rtt, SummaryRenderer};
pub use table::TextTable;
