//! market-pulse: client, screen state machine, and renderer for the Stock Market Pulse API.
//!
//! A lookup flows through three parts:
//! - [`app`] captures ticker input and owns the request lifecycle ([`PulseSession`]).
//! - [`core`] and [`pulse`] talk to the analysis service ([`PulseClient`]).
//! - [`render`] projects the session state onto a [`render::Screen`] and draws it.

pub mod app;
pub mod core;
pub mod health;
pub mod pulse;
pub mod render;

pub use app::{InputEvent, Key, PulseSession, RequestState, ResponsePolicy, Snapshot, TickerInput};
pub use crate::core::{ErrorKind, PulseClient, PulseClientBuilder, PulseError};
pub use health::HealthCheck;
pub use pulse::{MarketPulseReport, Momentum, NewsItem, PulseTag};

/// Installs a `fmt` subscriber honoring `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
