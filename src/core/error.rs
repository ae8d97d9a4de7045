use thiserror::Error;

/// Message shown when a lookup is submitted without a ticker.
pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a ticker symbol.";

/// Prefix for every failure that happened below the HTTP status line.
pub const TRANSPORT_PREFIX: &str = "Failed to fetch data: ";

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PulseError {
    /// The ticker was empty or whitespace; no request was sent.
    #[error("{}", EMPTY_TICKER_MESSAGE)]
    EmptyTicker,

    /// The service answered with a non-success status.
    ///
    /// Displays the server-provided `detail` when present, otherwise a message
    /// carrying the numeric status.
    #[error("{}", api_message(.status, .detail))]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The `detail` field of the error body, if the body was JSON and had one.
        detail: Option<String>,
        /// The URL that returned the error.
        url: String,
    },

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success body could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

/// Coarse classification of a [`PulseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// User input was rejected before any network access.
    Validation,
    /// The server rejected or failed the request.
    Http,
    /// The network was unreachable or the payload was malformed.
    Transport,
}

impl PulseError {
    /// Which error class this falls into.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTicker => ErrorKind::Validation,
            Self::Api { .. } => ErrorKind::Http,
            Self::Http(_) | Self::Json(_) | Self::Url(_) | Self::Data(_) => ErrorKind::Transport,
        }
    }

    /// The string shown in the error slot of the screen.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Http => self.to_string(),
            ErrorKind::Transport => format!("{TRANSPORT_PREFIX}{self}"),
        }
    }
}

fn api_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("HTTP error! Status: {status}"),
    }
}
