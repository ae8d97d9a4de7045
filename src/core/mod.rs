//! Core components of the `market-pulse` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`PulseClient`] and its builder.
//! - The primary [`PulseError`] type and its user-facing messages.
//! - Internal networking helpers shared by the endpoint modules.

/// The main client (`PulseClient`), builder, and configuration.
pub mod client;
/// The primary error type (`PulseError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PulseClient`
pub use client::{PulseClient, PulseClientBuilder};
pub use error::{EMPTY_TICKER_MESSAGE, ErrorKind, PulseError, TRANSPORT_PREFIX};
