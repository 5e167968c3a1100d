//! Two-level transition table: state -> event -> handler.

use crate::core::{Event, Handler, State};
use std::collections::HashMap;

/// Registry of handlers keyed by (state, event).
///
/// Each pair maps to at most one handler. The first registration for a pair
/// is kept; later ones are refused.
#[derive(Debug)]
pub(crate) struct TransitionTable<S: State, E: Event> {
    handlers: HashMap<S, HashMap<E, Handler<S>>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Insert a handler unless the pair is already taken.
    ///
    /// Hands the pair back when it already has a handler, leaving the
    /// existing entry untouched.
    pub(crate) fn insert(
        &mut self,
        state: S,
        event: E,
        handler: Handler<S>,
    ) -> Result<(), (S, E)> {
        let events = self.handlers.entry(state.clone()).or_default();
        if events.contains_key(&event) {
            return Err((state, event));
        }
        events.insert(event, handler);
        Ok(())
    }

    /// Find the handler for `event` while in `state`.
    pub(crate) fn lookup(&self, state: &S, event: &E) -> Option<&Handler<S>> {
        self.handlers.get(state)?.get(event)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
