//! Builder API for state machine construction.
//!
//! `FsmBuilder` is the explicit setup step: collect the initial state and
//! handlers, then build an [`Fsm`](crate::Fsm) ready for dispatch. The
//! `state_enum!` and `event_enum!` macros declare identifier enums.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{BuildError, RegistrationError};
pub use machine::FsmBuilder;
