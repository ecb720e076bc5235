#![allow(dead_code)]

mod test_server;

pub use fixtures::{lookup, request, TestDomains};
pub use test_server::TestServer;
