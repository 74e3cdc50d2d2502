//! PostgreSQL adapters - sqlx implementations of the storage ports.

mod criterion_catalog;
mod weight_store;

pub use criterion_catalog::PostgresCriterionCatalog;
pub use weight_store::PostgresWeightStore;
