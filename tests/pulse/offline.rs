use httpmock::Method::GET;
use market_pulse::{PulseError, PulseTag};

use crate::common::{self, MARKET_PULSE_PATH};

fn fixture(symbol: &str) -> String {
    common::fixture("market_pulse", symbol, "json")
}

#[tokio::test]
async fn offline_report_uses_recorded_fixture() {
    let server = common::setup_server();
    let mock = common::mock_market_pulse(&server, "NVDA", fixture("NVDA"));

    let client = common::client_for(&server);
    let report = client.market_pulse("NVDA").await.unwrap();

    mock.assert();

    assert_eq!(report.ticker, "NVDA");
    assert_eq!(report.as_of, "2025-06-13");
    assert_eq!(report.pulse, PulseTag::Bullish);
    assert!(report.llm_explanation.starts_with("A positive momentum score"));
    assert_eq!(report.momentum.score, 0.68);
    assert_eq!(report.momentum.returns, vec![1.42, -0.87, 0.0, 2.15]);

    let titles: Vec<_> = report.news.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Nvidia unveils next-generation data center chips",
            "Analysts raise price targets after earnings beat",
            "Chip stocks slip as export rules tighten",
        ]
    );
    assert_eq!(report.news[0].url, "https://news.example.com/nvda/chips");
    assert_eq!(report.news[2].published, "2025-06-10");
}

#[tokio::test]
async fn offline_report_with_empty_sequences() {
    let server = common::setup_server();
    let mock = common::mock_market_pulse(&server, "QUIET", fixture("QUIET"));

    let report = common::client_for(&server)
        .market_pulse("QUIET")
        .await
        .unwrap();

    mock.assert();
    assert!(report.momentum.returns.is_empty());
    assert!(report.news.is_empty());
    assert_eq!(report.momentum.score, 0.0);
}

#[tokio::test]
async fn ticker_is_percent_encoded_in_query() {
    let server = common::setup_server();
    // httpmock matches against the decoded value
    let mock = common::mock_market_pulse(&server, "^GSPC", common::report_body("^GSPC"));

    let report = common::client_for(&server)
        .market_pulse("^GSPC")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(report.ticker, "^GSPC");
}

#[tokio::test]
async fn request_line_uses_percent_encoding_not_form_encoding() {
    let server = common::setup_server();
    let mock = common::mock_market_pulse_status(
        &server,
        "BRK B",
        404,
        r#"{"detail":"Ticker 'BRK B' not found"}"#,
    );

    let err = common::client_for(&server)
        .market_pulse("BRK B")
        .await
        .unwrap_err();

    mock.assert();
    // The error carries the URL exactly as it went on the wire.
    match err {
        PulseError::Api { url, .. } => {
            assert!(url.ends_with("/api/v1/market-pulse?ticker=BRK%20B"), "url was {url}");
            assert!(!url.contains('+'));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_ticker_is_rejected_without_request() {
    let server = common::setup_server();
    let mock = common::mock_any_market_pulse(&server);
    let client = common::client_for(&server);

    for ticker in ["", "   ", "\t"] {
        let err = client.market_pulse(ticker).await.unwrap_err();
        assert!(matches!(err, PulseError::EmptyTicker), "got {err:?}");
    }

    mock.assert_hits(0);
}

#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(MARKET_PULSE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"ticker\": \"NVDA\", ");
    });

    let err = common::client_for(&server)
        .market_pulse("NVDA")
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, PulseError::Json(_)), "got {err:?}");
    assert!(err.user_message().starts_with("Failed to fetch data: "));
}

#[tokio::test]
async fn report_without_momentum_is_a_data_error() {
    let server = common::setup_server();
    let mock = common::mock_market_pulse(
        &server,
        "NVDA",
        r#"{"ticker":"NVDA","as_of":"2025-06-13","pulse":"bullish","llm_explanation":"","news":[]}"#
            .to_string(),
    );

    let err = common::client_for(&server)
        .market_pulse("NVDA")
        .await
        .unwrap_err();

    mock.assert();
    match err {
        PulseError::Data(field) => assert_eq!(field, "momentum"),
        other => panic!("expected Data error, got {other:?}"),
    }
}
