use httpmock::Method::GET;
use std::time::Duration;

use market_pulse::{
    InputEvent, PulseClient, PulseSession, RequestState,
    render::{self, Body},
};

use crate::common::{self, MARKET_PULSE_PATH};

async fn wait_until_loading(session: &PulseSession) {
    for _ in 0..100 {
        if session.state().is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session never entered Loading");
}

#[tokio::test]
async fn starts_idle_with_empty_ticker() {
    let session = PulseSession::new(PulseClient::new().unwrap());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.ticker, "");
    assert_eq!(snapshot.state, RequestState::Idle);
    assert_eq!(render::screen(&snapshot).body, Body::Empty);
}

#[tokio::test]
async fn loading_is_visible_while_in_flight_and_cleared_after() {
    let server = common::setup_server();
    let mock = common::mock_market_pulse_delayed(
        &server,
        "NVDA",
        common::report_body("NVDA"),
        Duration::from_millis(300),
    );
    let session = PulseSession::new(common::client_for(&server));

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit_ticker("NVDA").await })
    };
    wait_until_loading(&session).await;

    let screen = render::screen(&session.snapshot());
    assert!(!screen.button.enabled);
    assert_eq!(screen.button.label, render::BUTTON_BUSY);
    assert!(matches!(screen.body, Body::Loading { .. }));

    // The button is disabled, so this click is ignored.
    session.handle(InputEvent::SubmitClicked).await;

    task.await.unwrap();
    mock.assert_hits(1);

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.report().map(|r| r.ticker.as_str()), Some("NVDA"));
    assert!(render::screen(&session.snapshot()).button.enabled);
}

#[tokio::test]
async fn new_submission_discards_previous_terminal_state() {
    let server = common::setup_server();
    let ok = common::mock_market_pulse(&server, "NVDA", common::report_body("NVDA"));
    let slow_fail = server.mock(|when, then| {
        when.method(GET)
            .path(MARKET_PULSE_PATH)
            .query_param("ticker", "ZZZZ");
        then.status(404)
            .delay(Duration::from_millis(300))
            .header("content-type", "application/json")
            .body(r#"{"detail":"Ticker 'ZZZZ' not found"}"#);
    });
    let session = PulseSession::new(common::client_for(&server));

    session.submit_ticker("NVDA").await;
    assert!(session.state().report().is_some());

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit_ticker("zzzz").await })
    };
    wait_until_loading(&session).await;
    assert!(session.state().report().is_none());
    assert!(session.state().error_message().is_none());

    task.await.unwrap();
    ok.assert_hits(1);
    slow_fail.assert_hits(1);
    assert_eq!(
        session.state(),
        RequestState::Failure("Ticker 'ZZZZ' not found".into())
    );
}

#[tokio::test]
async fn http_failures_land_in_error_slot() {
    let server = common::setup_server();
    let not_found = common::mock_market_pulse_status(
        &server,
        "ZZZZ",
        404,
        r#"{"detail":"ticker not found"}"#,
    );
    let broken = common::mock_market_pulse_status(&server, "BOOM", 500, "<html>oops</html>");
    let session = PulseSession::new(common::client_for(&server));

    session.submit_ticker("ZZZZ").await;
    not_found.assert();
    assert_eq!(session.state().error_message(), Some("ticker not found"));
    assert_eq!(
        render::screen(&session.snapshot()).body,
        Body::Error {
            message: "ticker not found".into()
        }
    );

    session.submit_ticker("BOOM").await;
    broken.assert();
    let message = session.state().error_message().map(str::to_owned).unwrap();
    assert!(message.contains("500"), "message was {message:?}");
}

#[tokio::test]
async fn transport_failure_is_prefixed() {
    let client = PulseClient::builder()
        .base_url(url::Url::parse("http://127.0.0.1:9/").unwrap())
        .build()
        .unwrap();
    let session = PulseSession::new(client);

    session.submit_ticker("NVDA").await;

    let state = session.state();
    let message = state.error_message().expect("failure state");
    assert!(message.starts_with("Failed to fetch data: "), "message was {message:?}");
    assert!(!state.is_loading());
}

#[tokio::test]
async fn cancelled_lookup_does_not_stay_loading() {
    let server = common::setup_server();
    let _mock = common::mock_market_pulse_delayed(
        &server,
        "NVDA",
        common::report_body("NVDA"),
        Duration::from_millis(500),
    );
    let session = PulseSession::new(common::client_for(&server));

    let res = tokio::time::timeout(Duration::from_millis(50), session.submit_ticker("NVDA")).await;
    assert!(res.is_err(), "lookup should still have been in flight");

    assert_eq!(session.state(), RequestState::Idle);
    assert_eq!(session.ticker(), "NVDA");
}
