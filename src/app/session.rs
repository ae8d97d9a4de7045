use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    app::{
        input::{InputAction, InputEvent, TickerInput},
        state::{RequestState, Snapshot},
    },
    core::{PulseClient, PulseError},
    pulse::MarketPulseReport,
};

/// How responses of overlapping lookups are reconciled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Every response is applied when it arrives; the one that settles last is shown,
    /// regardless of submission order.
    #[default]
    LastSettledWins,
    /// Responses of superseded submissions are dropped; only the most recent
    /// submission can change the state.
    LatestSubmissionWins,
}

#[derive(Debug, Default)]
struct Shared {
    input: TickerInput,
    state: RequestState,
    /// Bumped on every submission, including rejected ones.
    generation: u64,
}

/// Owns the input value and the request lifecycle of one screen.
///
/// Clones share state, so a clone can be handed to a spawned task while the
/// original keeps serving input events. The lock is never held across the
/// network call.
///
/// # Example
///
/// ```no_run
/// # use market_pulse::{InputEvent, Key, PulseClient, PulseSession, render::{self, Surface}};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = PulseSession::new(PulseClient::new()?);
/// session.handle(InputEvent::Changed("nvda".into())).await;
/// session.handle(InputEvent::KeyDown(Key::Enter)).await;
///
/// let screen = render::screen(&session.snapshot());
/// println!("{}", render::TextSurface.render(&screen));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PulseSession {
    client: PulseClient,
    shared: Arc<Mutex<Shared>>,
    policy: ResponsePolicy,
}

impl PulseSession {
    /// Creates an idle session with an empty ticker.
    pub fn new(client: PulseClient) -> Self {
        Self {
            client,
            shared: Arc::new(Mutex::new(Shared::default())),
            policy: ResponsePolicy::default(),
        }
    }

    /// Selects how overlapping lookups are reconciled. Default: [`ResponsePolicy::LastSettledWins`].
    #[must_use]
    pub const fn response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn client(&self) -> &PulseClient {
        &self.client
    }

    /// Copies out the current ticker and request state.
    pub fn snapshot(&self) -> Snapshot {
        let shared = self.lock();
        Snapshot {
            ticker: shared.input.value().to_string(),
            state: shared.state.clone(),
        }
    }

    pub fn state(&self) -> RequestState {
        self.lock().state.clone()
    }

    /// Current (upper-cased) input value.
    pub fn ticker(&self) -> String {
        self.lock().input.value().to_string()
    }

    /// Routes an input event, submitting when it asks for it.
    pub async fn handle(&self, event: InputEvent) {
        let action = {
            let mut shared = self.lock();
            let submit_enabled = !shared.state.is_loading();
            shared.input.capture(event, submit_enabled)
        };
        if action == InputAction::Submit {
            self.submit().await;
        }
    }

    /// Types `raw` into the input and submits it.
    pub async fn submit_ticker(&self, raw: &str) {
        self.lock().input.set(raw);
        self.submit().await;
    }

    /// Looks up the ticker currently in the input.
    ///
    /// A blank ticker fails immediately with the validation message. Otherwise the
    /// state goes to `Loading` until the request settles into `Success` or `Failure`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn submit(&self) {
        let Some((ticker, generation)) = self.begin() else {
            return;
        };

        let in_flight = InFlight {
            session: self,
            generation,
            settled: false,
        };
        let outcome = self.client.market_pulse(&ticker).await;
        in_flight.settle(outcome);
    }

    /// Validates the input and moves to `Loading`. Returns what to fetch, if anything.
    fn begin(&self) -> Option<(String, u64)> {
        let mut shared = self.lock();
        shared.generation += 1;

        if shared.input.is_blank() {
            #[cfg(feature = "tracing")]
            tracing::debug!(generation = shared.generation, "rejected blank ticker");
            shared.state = RequestState::Failure(PulseError::EmptyTicker.user_message());
            return None;
        }

        let ticker = shared.input.value().trim().to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(generation = shared.generation, %ticker, "lookup started");
        shared.state = RequestState::Loading;
        Some((ticker, shared.generation))
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A submitted request that has not settled yet.
///
/// Dropping it unsettled (the submitting future was cancelled) takes the
/// session out of `Loading` if nothing newer started meanwhile.
struct InFlight<'a> {
    session: &'a PulseSession,
    generation: u64,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Result<MarketPulseReport, PulseError>) {
        self.settled = true;
        let mut shared = self.session.lock();

        if self.session.policy == ResponsePolicy::LatestSubmissionWins
            && shared.generation != self.generation
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                generation = self.generation,
                latest = shared.generation,
                "discarding superseded response"
            );
            return;
        }

        shared.state = match outcome {
            Ok(report) => RequestState::Success(report),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, kind = ?err.kind(), "lookup failed");
                RequestState::Failure(err.user_message())
            }
        };
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut shared = self.session.lock();
        if shared.generation == self.generation && shared.state.is_loading() {
            shared.state = RequestState::Idle;
        }
    }
}
