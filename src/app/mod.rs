//! Screen state: input capture, request lifecycle, and the session tying them to the client.

pub mod input;
mod session;
mod state;

pub use input::{InputAction, InputEvent, Key, TickerInput};
pub use session::{PulseSession, ResponsePolicy};
pub use state::{RequestState, Snapshot};
