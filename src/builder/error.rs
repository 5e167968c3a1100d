//! Errors raised while assembling a state machine.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}

/// Errors that can occur when registering a handler.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    #[error("Handler already registered for state '{state}' and event '{event}'")]
    DuplicateHandler { state: String, event: String },
}

impl RegistrationError {
    pub(crate) fn duplicate<S: State, E: Event>(state: &S, event: &E) -> Self {
        Self::DuplicateHandler {
            state: state.name().to_string(),
            event: event.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_the_pair() {
        let err = RegistrationError::duplicate(&"gear-1", &"press-off");
        assert_eq!(
            err.to_string(),
            "Handler already registered for state 'gear-1' and event 'press-off'"
        );
    }
}
