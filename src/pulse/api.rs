use crate::{
    core::{PulseClient, PulseError, net},
    pulse::{
        model::{MarketPulseReport, Momentum, NewsItem, PulseTag},
        wire::{MomentumWire, NewsWire, ReportWire},
    },
};
use url::Url;

pub(crate) async fn fetch_market_pulse(
    client: &PulseClient,
    ticker: &str,
) -> Result<MarketPulseReport, PulseError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(PulseError::EmptyTicker);
    }

    let url = request_url(client, ticker)?;
    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(net::status_error(resp).await);
    }

    let body = net::get_text(resp, "market_pulse").await?;
    let wire: ReportWire = serde_json::from_str(&body)?;
    into_report(wire)
}

/// Percent-encodes the ticker (`%20` for spaces, not form-style `+`).
fn request_url(client: &PulseClient, ticker: &str) -> Result<Url, PulseError> {
    let mut url = client.market_pulse_url()?;
    url.set_query(Some(&format!("ticker={}", urlencoding::encode(ticker))));
    Ok(url)
}

fn into_report(wire: ReportWire) -> Result<MarketPulseReport, PulseError> {
    let momentum = wire
        .momentum
        .ok_or_else(|| PulseError::Data("momentum".into()))
        .and_then(into_momentum)?;

    Ok(MarketPulseReport {
        ticker: wire.ticker.unwrap_or_default(),
        as_of: wire.as_of.unwrap_or_default(),
        pulse: PulseTag::parse(wire.pulse.as_deref().unwrap_or_default()),
        llm_explanation: wire.llm_explanation.unwrap_or_default(),
        momentum,
        news: wire
            .news
            .unwrap_or_default()
            .into_iter()
            .map(into_news_item)
            .collect(),
    })
}

fn into_momentum(wire: MomentumWire) -> Result<Momentum, PulseError> {
    Ok(Momentum {
        score: wire
            .score
            .ok_or_else(|| PulseError::Data("momentum.score".into()))?,
        returns: wire.returns.unwrap_or_default(),
    })
}

fn into_news_item(wire: NewsWire) -> NewsItem {
    NewsItem {
        title: wire.title.unwrap_or_default(),
        url: wire.url.unwrap_or_default(),
        description: wire.description.unwrap_or_default(),
        published: wire.published.unwrap_or_default(),
    }
}
