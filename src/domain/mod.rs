//! Domain layer - pure business logic, no I/O.

pub mod ahp;
pub mod foundation;
