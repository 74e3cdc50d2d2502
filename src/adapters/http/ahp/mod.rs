//! HTTP adapter for the AHP decision engine.

mod dto;
mod handlers;
mod routes;

pub use handlers::AhpHandlers;
pub use routes::ahp_routes;
