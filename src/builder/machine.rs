//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, Handler, State};
use crate::fsm::Fsm;

/// Builder for constructing state machines with a fluent API.
///
/// Collects the initial state and every (state, event, handler) triple, then
/// hands them to a fresh [`Fsm`] in registration order. Duplicate pairs are
/// treated exactly as [`Fsm::add_handler`] treats them: the first one wins.
pub struct FsmBuilder<S: State, E: Event> {
    initial: Option<S>,
    handlers: Vec<(S, E, Handler<S>)>,
}

impl<S: State, E: Event> FsmBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            handlers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a handler for `event` while in `state`.
    pub fn handler<F>(mut self, state: S, event: E, handler: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.handlers.push((state, event, Handler::new(handler)));
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Fsm<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = Fsm::new(initial);
        for (state, event, handler) in self.handlers {
            machine.register(state, event, handler);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for FsmBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
