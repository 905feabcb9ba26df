//! Builder for constructing machines.

use crate::core::Entity;
use crate::definition::{State, StateEntry};
use crate::error::ConfigurationError;
use crate::machine::{Machine, MachineOptions};

/// Builder collecting states and options before constructing a machine.
pub struct MachineBuilder<E, R = ()> {
    states: Vec<StateEntry<E>>,
    options: MachineOptions<E, R>,
}

impl<E> MachineBuilder<E> {
    /// Create a new builder without options.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            options: MachineOptions::new(),
        }
    }
}

impl<E, R> MachineBuilder<E, R> {
    /// Create a builder carrying the given options.
    pub fn with_options(options: MachineOptions<E, R>) -> Self {
        Self {
            states: Vec::new(),
            options,
        }
    }

    /// Append a state.
    pub fn state(mut self, state: impl Into<StateEntry<E>>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Append a state and mark it initial.
    pub fn initial(mut self, state: State<E>) -> Self {
        self.states.push(state.initial().into());
        self
    }

    /// Append multiple states at once.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateEntry<E>>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Replace the options, possibly changing the result type.
    pub fn options<R2>(self, options: MachineOptions<E, R2>) -> MachineBuilder<E, R2> {
        MachineBuilder {
            states: self.states,
            options,
        }
    }
}

impl<E: Entity, R: Clone> MachineBuilder<E, R> {
    /// Build the machine.
    /// Returns an error if the state list is empty or malformed.
    pub fn build(self) -> Result<Machine<E, R>, ConfigurationError> {
        Machine::with_options(self.states, self.options)
    }
}

impl<E> Default for MachineBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
