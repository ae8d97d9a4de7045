use std::time::Duration;

use market_pulse::{
    PulseClient, PulseSession,
    render::{self, Surface, TextSurface},
};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    market_pulse::init_tracing_for_tests();

    // 1. Point the client at the backend. Defaults to the address baked in at build time.
    let mut builder = PulseClient::builder().connect_timeout(Duration::from_secs(5));
    if let Ok(base) = std::env::var("MARKET_PULSE_BASE_URL") {
        builder = builder.base_url(Url::parse(&base)?);
    }
    let client = builder.build()?;

    // 2. Check which backend dependencies are up.
    match client.health().await {
        Ok(health) => {
            println!("Service status: {}", health.status);
            for (name, state) in health.degraded_services() {
                println!("  degraded: {name} ({state})");
            }
        }
        Err(e) => println!("Health probe failed: {}", e.user_message()),
    }
    println!();

    // 3. Look up a ticker through a session and print the rendered screen.
    let ticker = std::env::args().nth(1).unwrap_or_else(|| "nvda".to_string());
    let session = PulseSession::new(client);
    session.submit_ticker(&ticker).await;

    let screen = render::screen(&session.snapshot());
    println!("{}", TextSurface.render(&screen));

    Ok(())
}
