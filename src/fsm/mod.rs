//! The dispatch engine.
//!
//! [`Fsm`] owns the transition table and the mutex-guarded current state.
//! Dispatch is synchronous: the handler runs on the calling thread while the
//! lock is held.

mod machine;
mod table;

pub use machine::Fsm;
