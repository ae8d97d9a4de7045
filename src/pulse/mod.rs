//! The market pulse report endpoint (`GET /api/v1/market-pulse`).

pub(crate) mod api;
mod model;
mod wire;

pub use model::{MarketPulseReport, Momentum, NewsItem, PulseTag};
