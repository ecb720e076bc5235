//! dnsc Infrastructure Layer
//!
//! DNS client adapter built on `hickory-proto` wire encoding and a plain
//! tokio UDP transport.
pub mod dns;
