//! Mutex-guarded finite state machine.

use crate::builder::error::RegistrationError;
use crate::core::{Event, Handler, State};
use crate::fsm::table::TransitionTable;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// Finite state machine dispatching events to (state, event) handlers.
///
/// Registration needs `&mut self` and dispatch needs `&self`, so once an
/// engine is shared (for example behind an `Arc`) its table is frozen and
/// only the current state moves.
///
/// Every [`call`](Fsm::call) holds the state lock for its whole duration,
/// handler included. A handler must not dispatch on the engine that runs it:
/// that deadlocks.
///
/// # Example
///
/// ```rust
/// use lockstep::Fsm;
///
/// let mut door = Fsm::new("closed");
/// door.add_handler("closed", "push", || "open")
///     .add_handler("open", "pull", || "closed");
///
/// assert_eq!(door.call("push"), "open");
/// assert_eq!(door.call("push"), "open"); // nothing registered for (open, push)
/// assert_eq!(door.call("pull"), "closed");
/// ```
pub struct Fsm<S: State, E: Event> {
    current: Mutex<S>,
    table: TransitionTable<S, E>,
}

impl<S: State, E: Event> Fsm<S, E> {
    /// Create a machine in `initial` with no transitions.
    pub fn new(initial: S) -> Self {
        Self {
            current: Mutex::new(initial),
            table: TransitionTable::new(),
        }
    }

    /// Register `handler` for `event` while in `state`.
    ///
    /// The first handler registered for a pair wins. A duplicate is logged
    /// at warn level and dropped; the call still returns the machine so
    /// registrations can be chained.
    pub fn add_handler<F>(&mut self, state: S, event: E, handler: F) -> &mut Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.register(state, event, Handler::new(handler));
        self
    }

    /// Register `handler` for `event` while in `state`, refusing duplicates.
    ///
    /// Unlike [`add_handler`](Fsm::add_handler) this reports a taken pair as
    /// [`RegistrationError::DuplicateHandler`]. The table is unchanged in
    /// that case.
    pub fn try_add_handler<F>(
        &mut self,
        state: S,
        event: E,
        handler: F,
    ) -> Result<&mut Self, RegistrationError>
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.table
            .insert(state, event, Handler::new(handler))
            .map_err(|(state, event)| RegistrationError::duplicate(&state, &event))?;
        Ok(self)
    }

    pub(crate) fn register(&mut self, state: S, event: E, handler: Handler<S>) {
        if let Err((state, event)) = self.table.insert(state, event, handler) {
            warn!(
                state = %state.name(),
                event = %event.name(),
                "handler already registered for state and event, ignoring"
            );
        }
    }

    /// Dispatch `event` and return the state the machine is in afterwards.
    ///
    /// When no handler is registered for (current state, `event`) this is a
    /// silent no-op returning the current state. Otherwise the handler runs
    /// under the lock and its return value becomes the current state, even
    /// when it equals the old one.
    pub fn call(&self, event: E) -> S {
        let mut current = self.lock();

        let Some(handler) = self.table.lookup(&current, &event) else {
            return current.clone();
        };

        let next = handler.execute();
        let previous = std::mem::replace(&mut *current, next);
        info!(
            from = %previous.name(),
            to = %current.name(),
            event = %event.name(),
            "state transition"
        );

        current.clone()
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        self.lock().clone()
    }

    // A handler that panicked left the last committed state in place.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }
}

impl<S: State, E: Event> fmt::Debug for Fsm<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("current", &*self.lock())
            .finish_non_exhaustive()
    }
}
