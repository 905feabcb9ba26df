//! The machine: owns the state list and executes transitions.

use crate::core::{Entity, StateHistory, StateTransition};
use crate::definition::{State, StateEntry};
use crate::error::ConfigurationError;
use crate::machine::options::{MachineOptions, Trigger};
use crate::machine::validation::validate_states;
use chrono::Utc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Why a step was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    /// No transition of the current state accepts the trigger
    NoTransition,
    /// The transition resolved no candidate
    NoCandidate,
    /// No state is identified by the candidate
    NoDestination,
}

/// A step that passed lookup and is ready to commit.
struct Step<E> {
    transition: usize,
    candidate: E,
    destination: usize,
}

/// Stateful executor over a fixed list of states.
///
/// `R` is the type of the running result; machines without a result fold
/// use `()`.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{Machine, State};
///
/// let mut machine = Machine::new([
///     State::new("solid").to("liquid").initial(),
///     State::new("liquid").to("solid").to("gas"),
///     State::new("gas").to("liquid"),
/// ])
/// .unwrap();
///
/// assert!(!machine.go("gas"));
/// assert!(machine.go("liquid"));
/// assert!(machine.go("gas"));
/// assert_eq!(machine.history(), ["liquid", "gas"]);
/// ```
pub struct Machine<E, R = ()> {
    states: Vec<State<E>>,
    initial: usize,
    current: usize,
    history: StateHistory<E>,
    result: R,
    options: MachineOptions<E, R>,
}

impl<E: Entity> Machine<E> {
    /// Create a machine without a result fold or hooks.
    pub fn new<I, S>(states: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<StateEntry<E>>,
    {
        Self::with_options(states, MachineOptions::default())
    }
}

impl<E: Entity, R: Clone> Machine<E, R> {
    /// Create a machine with the given options.
    ///
    /// Fails if the list is empty or if any entry has no identity test.
    pub fn with_options<I, S>(
        states: I,
        options: MachineOptions<E, R>,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<StateEntry<E>>,
    {
        let states = validate_states(states.into_iter().map(Into::into).collect())?;
        let initial = states.iter().position(State::is_initial).unwrap_or(0);
        let history = StateHistory::new(Uuid::new_v4());
        let result = options.initial_result();

        debug!(
            run_id = %history.run_id(),
            states = states.len(),
            initial,
            "machine constructed"
        );

        Ok(Self {
            states,
            initial,
            current: initial,
            history,
            result,
            options,
        })
    }

    /// Advance by input entity.
    ///
    /// Returns `true` if a transition was committed. On `false` nothing
    /// changed apart from the unsupported notification.
    pub fn go(&mut self, entity: E) -> bool {
        self.advance(Trigger::Entity(&entity))
    }

    /// Advance by transition name, bypassing entity matching.
    ///
    /// The committed entity is the transition's resolved candidate.
    pub fn run(&mut self, name: &str) -> bool {
        self.advance(Trigger::Named(name))
    }

    /// Whether `go(entity)` would commit. Never mutates the machine and
    /// never fires hooks.
    pub fn can_transite(&self, entity: &E) -> bool {
        self.plan(Trigger::Entity(entity)).is_ok()
    }

    /// Whether `run(name)` would commit.
    pub fn can_run(&self, name: &str) -> bool {
        self.plan(Trigger::Named(name)).is_ok()
    }

    /// Reselect the initial state, clear the history and reseed the result.
    ///
    /// Side effects already performed by hooks are not undone.
    pub fn restart(&mut self) {
        self.current = self.initial;
        self.history = StateHistory::new(Uuid::new_v4());
        self.result = self.options.initial_result();

        debug!(
            run_id = %self.history.run_id(),
            initial = self.initial,
            "machine restarted"
        );
    }

    fn advance(&mut self, trigger: Trigger<'_, E>) -> bool {
        let step = match self.plan(trigger) {
            Ok(step) => step,
            Err(rejection) => {
                trace!(
                    run_id = %self.history.run_id(),
                    state = self.current,
                    ?trigger,
                    ?rejection,
                    "transition unsupported"
                );
                if let Some(hook) = &self.options.on_unsupported_transition {
                    hook(self.history.last(), trigger);
                }
                return false;
            }
        };

        let transition = &self.states[self.current].transitions()[step.transition];
        if !transition.fire(&step.candidate) {
            if let Some(hook) = &self.options.on_unhandled_transition {
                hook(self.history.last(), trigger);
            }
        }
        let name = transition.name().map(str::to_owned);

        let entity = match trigger {
            Trigger::Entity(entity) => entity.clone(),
            Trigger::Named(_) => step.candidate,
        };
        self.commit(entity, step.destination, name);
        true
    }

    /// Look up transition, candidate and destination without side effects.
    fn plan(&self, trigger: Trigger<'_, E>) -> Result<Step<E>, Rejection> {
        let transitions = self.states[self.current].transitions();

        let transition = match trigger {
            Trigger::Entity(entity) => transitions.iter().position(|t| t.accepts(entity)),
            Trigger::Named(name) => transitions.iter().position(|t| t.name() == Some(name)),
        }
        .ok_or(Rejection::NoTransition)?;

        let candidate = transitions[transition]
            .resolve_candidate()
            .ok_or(Rejection::NoCandidate)?;

        let destination = self
            .states
            .iter()
            .position(|state| state.matches(&candidate))
            .ok_or(Rejection::NoDestination)?;

        Ok(Step {
            transition,
            candidate,
            destination,
        })
    }

    fn commit(&mut self, entity: E, destination: usize, transition: Option<String>) {
        if let Some(calculate) = &self.options.calculate_result {
            self.result = calculate(&self.result, &entity);
        }
        if let Some(hook) = &self.options.on_transition {
            hook(self.history.last(), &entity);
        }

        debug!(
            run_id = %self.history.run_id(),
            from = self.current,
            to = destination,
            transition = ?transition,
            ?entity,
            "transition committed"
        );

        self.history.record(
            StateTransition {
                from: self.current,
                to: destination,
                transition,
                timestamp: Utc::now(),
            },
            entity,
        );
        self.current = destination;
    }
}

impl<E, R> Machine<E, R> {
    /// True iff the current state has no outgoing transitions.
    pub fn is_finished(&self) -> bool {
        self.current_state().is_terminal()
    }

    /// Committed entities in chronological order.
    pub fn history(&self) -> &[E] {
        self.history.entities()
    }

    /// Full history with per-commit records.
    pub fn state_history(&self) -> &StateHistory<E> {
        &self.history
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    /// Most recently committed entity.
    pub fn last(&self) -> Option<&E> {
        self.history.last()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_state(&self) -> &State<E> {
        &self.states[self.current]
    }

    pub fn initial_index(&self) -> usize {
        self.initial
    }

    pub fn states(&self) -> &[State<E>] {
        &self.states
    }

    pub fn run_id(&self) -> Uuid {
        self.history.run_id()
    }
}
