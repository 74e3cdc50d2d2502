//! Ports - trait contracts between the application core and its adapters.

mod criterion_catalog;
mod weight_store;

pub use criterion_catalog::CriterionCatalog;
pub use weight_store::{SavedWeightRow, StoredWeight, WeightEntry, WeightStore};
