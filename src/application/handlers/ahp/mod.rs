//! AHP command/query handlers.

mod calculate_weights;
mod get_criteria;
mod get_latest_session;
mod save_weights;

#[cfg(test)]
pub(crate) mod test_support;

pub use calculate_weights::{
    CalculateWeightsCommand, CalculateWeightsHandler, CalculationOutcome, CalculationVerdict,
};
pub use get_criteria::GetCriteriaHandler;
pub use get_latest_session::{GetLatestSessionHandler, LatestSessionView, SessionWeightItem};
pub use save_weights::{SaveWeightsCommand, SaveWeightsHandler, SaveWeightsResult};
