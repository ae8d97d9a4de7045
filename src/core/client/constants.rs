//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("market-pulse/", env!("CARGO_PKG_VERSION"));

/// Backend address used when neither the builder nor the build environment overrides it.
pub(crate) const FALLBACK_BASE_URL: &str = "http://localhost:8000/";

/// Backend address baked in at build time.
///
/// Set `MARKET_PULSE_BASE_URL` while compiling to point release builds at another backend.
pub(crate) const DEFAULT_BASE_URL: &str = match option_env!("MARKET_PULSE_BASE_URL") {
    Some(url) => url,
    None => FALLBACK_BASE_URL,
};

/// Market pulse report endpoint, relative to the base address.
pub(crate) const MARKET_PULSE_PATH: &str = "api/v1/market-pulse";

/// Health probe endpoint, relative to the base address.
pub(crate) const HEALTH_PATH: &str = "health";
