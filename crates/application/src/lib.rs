//! dnsc Application Layer
//!
//! Ports the engine depends on, the lookup use cases (expansion, execution,
//! dispatch and collection) and the summary renderer.
pub mod ports;
pub mod services;
pub mod use_cases;
