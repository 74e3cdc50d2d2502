//! HTTP adapters - REST API implementations.

pub mod ahp;

pub use ahp::{ahp_routes, AhpHandlers};
