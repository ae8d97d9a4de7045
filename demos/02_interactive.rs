use std::io::{self, BufRead, Write};

use market_pulse::{
    InputEvent, Key, PulseClient, PulseSession,
    render::{self, HtmlSurface, Surface, TextSurface},
};
use url::Url;

/// Each line typed is treated as the full input value followed by Enter.
/// `:html` prints the last screen as markup, `:quit` exits.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    market_pulse::init_tracing_for_tests();

    let mut builder = PulseClient::builder();
    if let Ok(base) = std::env::var("MARKET_PULSE_BASE_URL") {
        builder = builder.base_url(Url::parse(&base)?);
    }
    let session = PulseSession::new(builder.build()?);

    println!("{}", TextSurface.render(&render::screen(&session.snapshot())));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" => break,
            ":html" => {
                println!("{}", HtmlSurface.render(&render::screen(&session.snapshot())));
                continue;
            }
            _ => {}
        }

        session.handle(InputEvent::Changed(line.to_string())).await;
        session.handle(InputEvent::KeyDown(Key::Enter)).await;

        println!("{}", TextSurface.render(&render::screen(&session.snapshot())));
    }

    Ok(())
}
