//! Transition handlers.
//!
//! A handler runs the side effect attached to a (state, event) pair and
//! decides which state the machine moves into.

use super::state::State;
use std::fmt;

/// Zero-argument callback that performs a side effect and returns the next state.
///
/// Handlers receive nothing from the engine. Whatever context they need is
/// captured by the closure.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Handler;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let presses = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&presses);
/// let to_on = Handler::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     "on"
/// });
///
/// assert_eq!(to_on.execute(), "on");
/// assert_eq!(presses.load(Ordering::SeqCst), 1);
/// ```
pub struct Handler<S: State> {
    callback: Box<dyn Fn() -> S + Send + Sync>,
}

impl<S: State> Handler<S> {
    /// Wrap a callback as a handler.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        Handler {
            callback: Box::new(callback),
        }
    }

    /// Run the side effect and return the state to move into.
    pub fn execute(&self) -> S {
        (self.callback)()
    }
}

impl<S: State> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
