//! Builder for constructing transitions.

use crate::core::Guard;
use crate::definition::{Transition, TransitionOptions};
use crate::error::ConfigurationError;
use std::sync::Arc;

/// Builder filling [`TransitionOptions`] with a fluent API.
pub struct TransitionBuilder<E> {
    options: TransitionOptions<E>,
}

impl<E> TransitionBuilder<E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            options: TransitionOptions::default(),
        }
    }

    /// Name the transition so `Machine::run` can take it (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Set the fixed target entity (optional).
    pub fn to(mut self, target: E) -> Self {
        self.options.to = Some(target);
        self
    }

    /// Produce the candidate entity with a closure instead of the target.
    pub fn generate_entity<F>(mut self, generate: F) -> Self
    where
        F: Fn() -> Option<E> + Send + Sync + 'static,
    {
        self.options.generate_entity = Some(Arc::new(generate));
        self
    }

    /// Accept input with a predicate instead of equality with the target.
    pub fn can_transite<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.options.can_transite = Some(Guard::new(predicate));
        self
    }

    /// Add an acceptance guard (optional).
    pub fn guard(mut self, guard: Guard<E>) -> Self {
        self.options.can_transite = Some(guard);
        self
    }

    /// Hook fired with the resolved entity when the transition is taken.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.options.on_transition = Some(Arc::new(hook));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<E>, ConfigurationError> {
        Transition::new(self.options)
    }
}

impl<E> Default for TransitionBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
