use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer of the backend's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall status, `"healthy"` when the service is up.
    pub status: String,
    /// Server-local ISO-8601 timestamp of the probe.
    pub timestamp: String,
    /// Per-dependency status, either `"connected"` or `"error: ..."`.
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

impl HealthCheck {
    /// `true` when the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }

    /// Dependencies that did not report `connected`, with their status text.
    pub fn degraded_services(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services
            .iter()
            .filter(|(_, state)| !state.eq_ignore_ascii_case("connected"))
            .map(|(name, state)| (name.as_str(), state.as_str()))
    }

    /// Parses `timestamp`; the service emits naive timestamps with optional fractional seconds.
    pub fn timestamp_parsed(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}
