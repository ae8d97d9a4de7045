//! Pure projection of a [`Snapshot`] onto displayable content.
//!
//! [`screen`] builds a [`Screen`] view model without side effects; a [`Surface`]
//! turns that model into text for a concrete output (HTML markup or a terminal).

mod markup;
mod text;

pub use markup::HtmlSurface;
pub use text::TextSurface;

use crate::{
    app::{RequestState, Snapshot},
    pulse::{MarketPulseReport, NewsItem, PulseTag},
};

pub const TITLE: &str = "Stock Market Pulse Analyzer";
pub const SUBTITLE: &str =
    "Get real-time stock analysis with momentum, news, and AI-powered recommendations.";
pub const INPUT_PLACEHOLDER: &str = "Enter stock ticker (e.g., NVDA, AAPL)";
pub const INPUT_ARIA_LABEL: &str = "Stock Ticker Symbol";
pub const BUTTON_IDLE: &str = "Get Pulse";
pub const BUTTON_BUSY: &str = "Fetching...";
pub const LOADING_MESSAGE: &str = "Loading data...";
pub const NO_RETURNS_MESSAGE: &str = "No sufficient return data available.";
pub const NO_NEWS_MESSAGE: &str = "No recent news found for this ticker.";

/// Something that can draw a [`Screen`].
pub trait Surface {
    fn render(&self, screen: &Screen) -> String;
}

/// Everything visible on the page for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input: InputView,
    pub button: ButtonView,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// The area below the input row. Only one of these shows at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Nothing submitted yet.
    Empty,
    Loading { message: &'static str },
    Error { message: String },
    Report(Box<ReportView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub ticker: String,
    /// `as of <date>` label.
    pub as_of_label: String,
    pub badge: Badge,
    pub explanation: String,
    pub momentum: MomentumView,
    pub news: NewsView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Upper-cased tag.
    pub label: String,
    /// `pulse-badge pulse-<tag>` for known tags, plain `pulse-badge` otherwise.
    pub class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentumView {
    pub score: f64,
    pub score_text: String,
    pub score_class: ScoreClass,
    pub returns: ReturnsView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReturnsView {
    Days(Vec<ReturnEntry>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnEntry {
    /// 1-based day number.
    pub day: usize,
    pub value: f64,
    /// `Day <n>: <value>%`.
    pub text: String,
    pub class: ReturnClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsView {
    Items(Vec<NewsEntry>),
    Placeholder(&'static str),
}

/// A headline rendered as a link that opens in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEntry {
    pub href: String,
    pub title: String,
    pub description: String,
    pub published: String,
}

/// Styling of the momentum score by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    Positive,
    Negative,
    Neutral,
}

impl ScoreClass {
    /// Zero and NaN are neutral.
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// CSS class; empty for neutral.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "score-positive",
            Self::Negative => "score-negative",
            Self::Neutral => "",
        }
    }
}

/// Styling of a single daily return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnClass {
    Positive,
    Negative,
}

impl ReturnClass {
    /// Zero counts as positive.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "return-positive",
            Self::Negative => "return-negative",
        }
    }
}

/// Builds the view model for `snapshot`.
pub fn screen(snapshot: &Snapshot) -> Screen {
    let loading = snapshot.state.is_loading();
    Screen {
        title: TITLE,
        subtitle: SUBTITLE,
        input: InputView {
            value: snapshot.ticker.clone(),
            placeholder: INPUT_PLACEHOLDER,
            aria_label: INPUT_ARIA_LABEL,
        },
        button: ButtonView {
            label: if loading { BUTTON_BUSY } else { BUTTON_IDLE },
            enabled: !loading,
        },
        body: body(&snapshot.state),
    }
}

pub fn body(state: &RequestState) -> Body {
    match state {
        RequestState::Idle => Body::Empty,
        RequestState::Loading => Body::Loading {
            message: LOADING_MESSAGE,
        },
        RequestState::Failure(message) => Body::Error {
            message: message.clone(),
        },
        RequestState::Success(report) => Body::Report(Box::new(report_view(report))),
    }
}

pub fn report_view(report: &MarketPulseReport) -> ReportView {
    ReportView {
        ticker: report.ticker.clone(),
        as_of_label: format!("as of {}", report.as_of),
        badge: badge(&report.pulse),
        explanation: report.llm_explanation.clone(),
        momentum: MomentumView {
            score: report.momentum.score,
            score_text: percent(report.momentum.score),
            score_class: ScoreClass::of(report.momentum.score),
            returns: returns_view(&report.momentum.returns),
        },
        news: news_view(&report.news),
    }
}

pub fn badge(tag: &PulseTag) -> Badge {
    let class = if tag.is_known() {
        format!("pulse-badge pulse-{}", tag.as_str())
    } else {
        "pulse-badge".to_string()
    };
    Badge {
        label: tag.as_str().to_uppercase(),
        class,
    }
}

fn returns_view(returns: &[f64]) -> ReturnsView {
    if returns.is_empty() {
        return ReturnsView::Placeholder(NO_RETURNS_MESSAGE);
    }
    ReturnsView::Days(
        returns
            .iter()
            .enumerate()
            .map(|(i, &value)| ReturnEntry {
                day: i + 1,
                value,
                text: format!("Day {}: {}", i + 1, percent(value)),
                class: ReturnClass::of(value),
            })
            .collect(),
    )
}

fn news_view(news: &[NewsItem]) -> NewsView {
    if news.is_empty() {
        return NewsView::Placeholder(NO_NEWS_MESSAGE);
    }
    NewsView::Items(
        news.iter()
            .map(|item| NewsEntry {
                href: item.url.clone(),
                title: item.title.clone(),
                description: item.description.clone(),
                published: item.published.clone(),
            })
            .collect(),
    )
}

fn percent(value: f64) -> String {
    format!("{value}%")
}
