//! Transition definitions: one outgoing edge of a state.

use crate::builder::TransitionBuilder;
use crate::core::{Entity, Guard};
use crate::error::ConfigurationError;
use std::fmt;
use std::sync::Arc;

/// Produces the candidate entity of a transition. `None` means "no valid
/// candidate" and aborts the step.
pub type EntityGenerator<E> = Arc<dyn Fn() -> Option<E> + Send + Sync>;

/// Side-effecting hook fired with the resolved candidate when a transition
/// is taken.
pub type TransitionHook<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Configuration of a single transition. Every field is optional.
///
/// Absent fields fall back to the defaults:
/// - no `generate_entity`: the candidate is the fixed `to` target
/// - no `can_transite`: an entity is accepted iff it equals `to`
///
/// Use [`TransitionBuilder`] to fill this from closures.
pub struct TransitionOptions<E> {
    pub name: Option<String>,
    pub to: Option<E>,
    pub generate_entity: Option<EntityGenerator<E>>,
    pub can_transite: Option<Guard<E>>,
    pub on_transition: Option<TransitionHook<E>>,
}

impl<E> Default for TransitionOptions<E> {
    fn default() -> Self {
        Self {
            name: None,
            to: None,
            generate_entity: None,
            can_transite: None,
            on_transition: None,
        }
    }
}

impl<E> TransitionOptions<E> {
    /// True when no target, no generator and no acceptance test is set.
    pub fn is_empty(&self) -> bool {
        self.to.is_none() && self.generate_entity.is_none() && self.can_transite.is_none()
    }
}

/// An immutable edge out of a state.
///
/// # Example
///
/// ```rust
/// use fsm_engine::Transition;
///
/// let freeze = Transition::builder()
///     .name("freeze")
///     .to("solid")
///     .build()
///     .unwrap();
///
/// assert_eq!(freeze.name(), Some("freeze"));
/// assert!(freeze.accepts(&"solid"));
/// assert_eq!(freeze.resolve_candidate(), Some("solid"));
/// ```
pub struct Transition<E> {
    name: Option<String>,
    to: Option<E>,
    generate_entity: Option<EntityGenerator<E>>,
    can_transite: Option<Guard<E>>,
    on_transition: Option<TransitionHook<E>>,
}

impl<E> Transition<E> {
    /// Build a transition from its options.
    ///
    /// Fails when the options carry nothing to accept or produce.
    pub fn new(options: TransitionOptions<E>) -> Result<Self, ConfigurationError> {
        if options.is_empty() {
            return Err(ConfigurationError::MissingTransitionOptions);
        }

        Ok(Self {
            name: options.name,
            to: options.to,
            generate_entity: options.generate_entity,
            can_transite: options.can_transite,
            on_transition: options.on_transition,
        })
    }

    /// Equality-only transition to a fixed target.
    pub fn target(to: E) -> Self {
        Self {
            name: None,
            to: Some(to),
            generate_entity: None,
            can_transite: None,
            on_transition: None,
        }
    }

    /// Give the transition a name so `Machine::run` can take it.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace equality with the target by an acceptance guard.
    pub fn with_guard(mut self, guard: Guard<E>) -> Self {
        self.can_transite = Some(guard);
        self
    }

    pub fn builder() -> TransitionBuilder<E> {
        TransitionBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The fixed target entity, if one was configured.
    pub fn target_entity(&self) -> Option<&E> {
        self.to.as_ref()
    }

    pub fn has_hook(&self) -> bool {
        self.on_transition.is_some()
    }

    /// Fire the per-transition hook with the resolved entity.
    ///
    /// Returns `true` if a hook ran ("handled"), `false` otherwise.
    pub fn fire(&self, entity: &E) -> bool {
        match &self.on_transition {
            Some(hook) => {
                hook(entity);
                true
            }
            None => false,
        }
    }
}

impl<E: Entity> Transition<E> {
    /// Entity this transition would produce if taken.
    pub fn resolve_candidate(&self) -> Option<E> {
        match &self.generate_entity {
            Some(generate) => generate(),
            None => self.to.clone(),
        }
    }

    /// Whether `entity` is acceptable input for this transition.
    pub fn accepts(&self, entity: &E) -> bool {
        match &self.can_transite {
            Some(guard) => guard.check(entity),
            None => self.to.as_ref() == Some(entity),
        }
    }
}

impl<E: Clone> Clone for Transition<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            to: self.to.clone(),
            generate_entity: self.generate_entity.clone(),
            can_transite: self.can_transite.clone(),
            on_transition: self.on_transition.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Transition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("to", &self.to)
            .field("generate_entity", &self.generate_entity.is_some())
            .field("can_transite", &self.can_transite.is_some())
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}

/// A transition as written in a state definition: either a bare target
/// entity or a full transition.
#[derive(Clone, Debug)]
pub enum TransitionEntry<E> {
    Target(E),
    Full(Transition<E>),
}

impl<E> TransitionEntry<E> {
    /// Normalize into a full transition.
    pub fn into_transition(self) -> Transition<E> {
        match self {
            TransitionEntry::Target(to) => Transition::target(to),
            TransitionEntry::Full(transition) => transition,
        }
    }
}

impl<E> From<Transition<E>> for TransitionEntry<E> {
    fn from(transition: Transition<E>) -> Self {
        TransitionEntry::Full(transition)
    }
}
