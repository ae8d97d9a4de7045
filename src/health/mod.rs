//! The service health probe (`GET /health`).

pub(crate) mod api;
mod model;

pub use model::HealthCheck;
