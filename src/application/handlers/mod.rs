//! Application handlers - orchestration between ports and the domain core.

pub mod ahp;
