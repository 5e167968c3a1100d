//! Core vocabulary of the state machine.
//!
//! - State and event identifiers via the `State` and `Event` traits
//! - Handlers that run on a matched (state, event) pair

mod handler;
mod state;

pub use handler::Handler;
pub use state::{Event, State};
