//! State definitions: an identity test plus an ordered list of transitions.

use crate::core::{Entity, Guard};
use crate::definition::transition::{Transition, TransitionEntry};
use std::fmt;

/// How a state recognizes the candidate entities that denote it.
#[derive(Clone)]
pub enum Identifier<E> {
    /// Matches no candidate. Used for pure starting states that nothing
    /// transitions back into.
    Anonymous,
    /// Matches candidates equal to the literal.
    Literal(E),
    /// Matches candidates the predicate accepts.
    Predicate(Guard<E>),
}

impl<E: Entity> Identifier<E> {
    pub fn matches(&self, entity: &E) -> bool {
        match self {
            Identifier::Anonymous => false,
            Identifier::Literal(literal) => literal == entity,
            Identifier::Predicate(guard) => guard.check(entity),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Identifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Anonymous => f.write_str("Anonymous"),
            Identifier::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Identifier::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Per-state options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateOptions {
    /// Marks the state the machine starts in.
    pub initial: bool,
}

impl StateOptions {
    pub fn initial() -> Self {
        Self { initial: true }
    }
}

/// A node of the machine's graph.
///
/// # Example
///
/// ```rust
/// use fsm_engine::State;
///
/// let liquid = State::new("liquid").to("solid").to("gas");
///
/// assert!(liquid.matches(&"liquid"));
/// assert_eq!(liquid.transitions().len(), 2);
/// assert!(!liquid.is_initial());
/// ```
#[derive(Clone, Debug)]
pub struct State<E> {
    identifier: Identifier<E>,
    transitions: Vec<Transition<E>>,
    initial: bool,
}

impl<E> State<E> {
    /// State identified by a literal entity.
    pub fn new(identifier: E) -> Self {
        Self::from_identifier(Identifier::Literal(identifier))
    }

    /// State identified by a predicate over candidates.
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self::from_identifier(Identifier::Predicate(Guard::new(predicate)))
    }

    /// State that no candidate ever identifies.
    pub fn anonymous() -> Self {
        Self::from_identifier(Identifier::Anonymous)
    }

    /// Full constructor, normalizing shorthand entries into transitions.
    pub fn from_parts<I>(identifier: Identifier<E>, entries: I, options: StateOptions) -> Self
    where
        I: IntoIterator<Item = TransitionEntry<E>>,
    {
        Self {
            identifier,
            transitions: entries
                .into_iter()
                .map(TransitionEntry::into_transition)
                .collect(),
            initial: options.initial,
        }
    }

    fn from_identifier(identifier: Identifier<E>) -> Self {
        Self::from_parts(identifier, Vec::new(), StateOptions::default())
    }

    /// Append a shorthand transition to a fixed target.
    pub fn to(mut self, target: E) -> Self {
        self.transitions.push(Transition::target(target));
        self
    }

    /// Append a full transition.
    pub fn transition(mut self, transition: Transition<E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Mark this state as the initial state.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    pub fn identifier(&self) -> &Identifier<E> {
        &self.identifier
    }

    /// Outgoing transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<E>] {
        &self.transitions
    }

    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// A state with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<E: Entity> State<E> {
    /// Whether `entity` denotes this state.
    pub fn matches(&self, entity: &E) -> bool {
        self.identifier.matches(entity)
    }
}

/// An element of the list handed to a machine.
///
/// `Bare` is a plain value with no identity test. Machines refuse it.
#[derive(Clone, Debug)]
pub enum StateEntry<E> {
    State(State<E>),
    Bare(E),
}

impl<E> From<State<E>> for StateEntry<E> {
    fn from(state: State<E>) -> Self {
        StateEntry::State(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_identifier_matches_by_equality() {
        let state = State::new("solid");

        assert!(state.matches(&"solid"));
        assert!(!state.matches(&"liquid"));
    }

    #[test]
    fn predicate_identifier_uses_predicate() {
        let state = State::matching(|c: &char| c.is_ascii_digit());

        assert!(state.matches(&'7'));
        assert!(!state.matches(&'x'));
    }

    #[test]
    fn identifier_reports_kind_of_identity_test() {
        let literal = State::new("solid");
        let predicate = State::matching(|e: &&str| e.is_empty());
        let anonymous: State<&str> = State::anonymous();

        assert!(matches!(literal.identifier(), Identifier::Literal("solid")));
        assert!(matches!(predicate.identifier(), Identifier::Predicate(_)));
        assert!(matches!(anonymous.identifier(), Identifier::Anonymous));
    }

    #[test]
    fn anonymous_identifier_matches_nothing() {
        let state: State<&str> = State::anonymous();

        assert!(!state.matches(&""));
        assert!(!state.matches(&"v"));
    }

    #[test]
    fn from_parts_normalizes_shorthand_in_order() {
        let freeze = Transition::builder()
            .name("freeze")
            .to("solid")
            .build()
            .unwrap();
        let state = State::from_parts(
            Identifier::Literal("liquid"),
            vec![TransitionEntry::from(freeze), TransitionEntry::Target("gas")],
            StateOptions::initial(),
        );

        assert!(state.is_initial());
        assert_eq!(state.transitions().len(), 2);
        assert_eq!(state.transitions()[0].name(), Some("freeze"));
        assert_eq!(state.transitions()[1].target_entity(), Some(&"gas"));
    }

    #[test]
    fn state_without_transitions_is_terminal() {
        assert!(State::new("gas").is_terminal());
        assert!(!State::new("gas").to("liquid").is_terminal());
    }

    #[test]
    fn initial_flag_defaults_to_false() {
        assert!(!State::new(1).is_initial());
        assert!(State::new(1).initial().is_initial());
    }
}
