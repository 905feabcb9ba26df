//! Configuration errors raised while building transitions and machines.

use thiserror::Error;

/// Errors that abort construction of a transition or a machine.
///
/// These are setup mistakes. A step that finds no transition is a normal
/// negative outcome of `go`/`run` and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("fsm: Transition must have parameter: set a target, an entity generator or an acceptance test")]
    MissingTransitionOptions,

    #[error("fsm: Machine must receive array of States, and each state must have identifier (offending positions: {positions:?})")]
    MissingIdentifier { positions: Vec<usize> },

    #[error("fsm: Machine must receive at least one State")]
    EmptyStateList,
}

impl ConfigurationError {
    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
