use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// The full structured answer for one ticker lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPulseReport {
    /// Ticker symbol as echoed by the service.
    pub ticker: String,
    /// Date label of the analysis. Opaque; see [`MarketPulseReport::as_of_date`].
    pub as_of: String,
    /// Coarse sentiment classification.
    pub pulse: PulseTag,
    /// Free-text explanation produced by the language model.
    pub llm_explanation: String,
    /// Price momentum block.
    pub momentum: Momentum,
    /// Recent headlines, newest first as delivered. May be empty.
    pub news: Vec<NewsItem>,
}

impl MarketPulseReport {
    /// Parses `as_of` when it is a `YYYY-MM-DD` label.
    pub fn as_of_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.as_of.trim(), "%Y-%m-%d").ok()
    }
}

/// Recent price trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Momentum {
    /// Signed trend indicator, in percent.
    pub score: f64,
    /// Daily returns in percent, oldest first. May be empty.
    pub returns: Vec<f64>,
}

/// A single headline attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Publication label, usually a date.
    pub published: String,
}

/// Pulse classification tag.
///
/// The set is open: tags the client does not know are kept verbatim in
/// [`PulseTag::Other`] and still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PulseTag {
    Bullish,
    Bearish,
    Neutral,
    Other(String),
}

impl PulseTag {
    /// Classifies a raw tag; matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bullish" => Self::Bullish,
            "bearish" => Self::Bearish,
            "neutral" => Self::Neutral,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Canonical text of the tag (the raw text for unknown tags).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this tag has a dedicated badge style.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for PulseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PulseTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
