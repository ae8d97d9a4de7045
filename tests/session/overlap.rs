use std::time::Duration;

use market_pulse::{PulseSession, RequestState, ResponsePolicy};

use crate::common;

fn reported_ticker(session: &PulseSession) -> Option<String> {
    match session.state() {
        RequestState::Success(report) => Some(report.ticker),
        _ => None,
    }
}

/// First lookup answers slowly, second answers immediately.
fn mock_slow_then_fast(server: &httpmock::MockServer) -> (httpmock::Mock<'_>, httpmock::Mock<'_>) {
    let slow = common::mock_market_pulse_delayed(
        server,
        "AAA",
        common::report_body("AAA"),
        Duration::from_millis(400),
    );
    let fast = common::mock_market_pulse(server, "BBB", common::report_body("BBB"));
    (slow, fast)
}

#[tokio::test]
async fn last_settled_response_wins_by_default() {
    let server = common::setup_server();
    let (slow, fast) = mock_slow_then_fast(&server);
    let session = PulseSession::new(common::client_for(&server));

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.submit_ticker("aaa").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    session.submit_ticker("bbb").await;
    assert_eq!(reported_ticker(&session).as_deref(), Some("BBB"));

    // The older request settles last and overwrites the newer result.
    first.await.unwrap();
    slow.assert();
    fast.assert();
    assert_eq!(reported_ticker(&session).as_deref(), Some("AAA"));
    assert_eq!(session.ticker(), "BBB");
}

#[tokio::test]
async fn latest_submission_policy_discards_stale_response() {
    let server = common::setup_server();
    let (slow, fast) = mock_slow_then_fast(&server);
    let session = PulseSession::new(common::client_for(&server))
        .response_policy(ResponsePolicy::LatestSubmissionWins);

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.submit_ticker("aaa").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    session.submit_ticker("bbb").await;
    first.await.unwrap();

    slow.assert();
    fast.assert();
    assert_eq!(reported_ticker(&session).as_deref(), Some("BBB"));
}

#[tokio::test]
async fn latest_submission_policy_keeps_validation_error_over_stale_response() {
    let server = common::setup_server();
    let slow = common::mock_market_pulse_delayed(
        &server,
        "AAA",
        common::report_body("AAA"),
        Duration::from_millis(300),
    );
    let session = PulseSession::new(common::client_for(&server))
        .response_policy(ResponsePolicy::LatestSubmissionWins);

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.submit_ticker("AAA").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    session.submit_ticker("").await;
    first.await.unwrap();

    slow.assert();
    assert_eq!(
        session.state().error_message(),
        Some(market_pulse::core::EMPTY_TICKER_MESSAGE)
    );
}
