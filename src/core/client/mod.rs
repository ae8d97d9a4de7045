//! Public client surface + builder.
//! Defaults live in `constants` (UA + base address).

mod constants;

use crate::core::PulseError;
use crate::health::HealthCheck;
use crate::pulse::MarketPulseReport;
use constants::{DEFAULT_BASE_URL, HEALTH_PATH, MARKET_PULSE_PATH, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the market pulse analysis service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_url: Url,
}

impl PulseClient {
    /// Create a new builder.
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /// Creates a client pointing at the build-time default backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the baked-in base address is not a valid URL or the
    /// HTTP client cannot be constructed.
    pub fn new() -> Result<Self, PulseError> {
        Self::builder().build()
    }

    /// The backend address every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn market_pulse_url(&self) -> Result<Url, PulseError> {
        Ok(self.base_url.join(MARKET_PULSE_PATH)?)
    }

    pub(crate) fn health_url(&self) -> Result<Url, PulseError> {
        Ok(self.base_url.join(HEALTH_PATH)?)
    }

    /// Fetches the market pulse report for `ticker`.
    ///
    /// The ticker is sent as given; case normalization belongs to input capture.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::EmptyTicker`] for a blank ticker without touching the
    /// network, [`PulseError::Api`] for non-2xx answers, and a transport variant
    /// when the request fails or the body is not a report.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn market_pulse(&self, ticker: &str) -> Result<MarketPulseReport, PulseError> {
        crate::pulse::api::fetch_market_pulse(self, ticker).await
    }

    /// Probes the backend's `/health` endpoint.
    ///
    /// # Errors
    ///
    /// Same mapping as [`PulseClient::market_pulse`] for status and transport failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn health(&self) -> Result<HealthCheck, PulseError> {
        crate::health::api::fetch_health(self).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PulseClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    http: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PulseClientBuilder {
    /// Override the backend address (e.g., `https://pulse.example.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`. UA and timeouts set on this builder are ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<PulseClient, PulseError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(PulseClient {
            http,
            base_url: with_trailing_slash(base_url),
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
