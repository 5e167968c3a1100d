//! Lockstep: a thread-safe finite state machine
//!
//! A machine is a registry of (state, event) → handler transitions plus a
//! mutex-guarded current state. Dispatching an event looks up the handler for
//! the current state, runs it, and adopts its return value as the new state.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque identifiers via the `State` and `Event` traits
//! - **Handler**: a zero-argument callback returning the next state
//! - **Fsm**: the engine; every dispatch is serialized by one lock
//!
//! Unknown (state, event) pairs are silent no-ops. Registering the same pair
//! twice keeps the first handler and logs a warning. Each handler-driven
//! transition is logged through [`tracing`]; the crate never installs a
//! subscriber itself.
//!
//! # Example
//!
//! ```rust
//! use lockstep::{event_enum, state_enum, FsmBuilder};
//!
//! state_enum! {
//!     enum Light {
//!         Red,
//!         Green,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Go,
//!         Stop,
//!     }
//! }
//!
//! let light = FsmBuilder::new()
//!     .initial(Light::Red)
//!     .handler(Light::Red, Signal::Go, || Light::Green)
//!     .handler(Light::Green, Signal::Stop, || Light::Red)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(light.call(Signal::Go), Light::Green);
//! assert_eq!(light.call(Signal::Go), Light::Green);
//! assert_eq!(light.call(Signal::Stop), Light::Red);
//! ```

pub mod builder;
pub mod core;
pub mod fsm;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder, RegistrationError};
pub use crate::core::{Event, Handler, State};
pub use crate::fsm::Fsm;
