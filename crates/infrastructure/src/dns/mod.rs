pub mod client;
pub mod forwarding;
pub mod transport;

pub use client::{resolve_server_addr, HickoryDnsClient};
