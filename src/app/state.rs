use crate::pulse::MarketPulseReport;

/// Lifecycle of the current lookup. Exactly one variant holds at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last settled request produced a report.
    Success(MarketPulseReport),
    /// The last settled request (or validation) failed with this message.
    Failure(String),
}

impl RequestState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn report(&self) -> Option<&MarketPulseReport> {
        match self {
            Self::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything the renderer needs, copied out of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Current input box value.
    pub ticker: String,
    pub state: RequestState,
}
