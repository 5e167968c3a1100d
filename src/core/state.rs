//! Identifier traits for machine states and events.
//!
//! States and events are opaque tokens: the engine only hashes, compares and
//! clones them, and asks for a name when writing diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state names one configuration of the machine. The engine places no
/// structure on states beyond equality, so any closed enum or open string
/// space works.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed back to callers by value
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: engines are shared across threads
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for the stimuli fed to a state machine.
///
/// Same shape as [`State`]: an opaque, hashable token with a display name.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }
}
