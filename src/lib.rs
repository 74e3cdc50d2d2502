//! Geodecide - web GIS decision-support backend.
//!
//! This crate implements the AHP (Analytic Hierarchy Process) weighting
//! engine behind the map application's decision panel: pairwise comparison
//! matrix validation, priority weight derivation, consistency evaluation,
//! and immutable weight-session persistence in PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
