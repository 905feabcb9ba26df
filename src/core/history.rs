//! Transition history tracking.
//!
//! A machine keeps two views of what it committed: the plain sequence of
//! committed entities, and one `StateTransition` record per commit carrying
//! the state indices, the transition name and the commit time. Both grow in
//! lockstep and are only cleared by a restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: 0,
///     to: 1,
///     transition: Some("melt".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Index of the state being left
    pub from: usize,
    /// Index of the state being entered
    pub to: usize,
    /// Name of the transition taken, if it had one
    pub transition: Option<String>,
    /// When the commit happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only history of one machine run.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::{StateHistory, StateTransition};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let mut history = StateHistory::new(Uuid::new_v4());
///
/// history.record(
///     StateTransition { from: 0, to: 1, transition: None, timestamp: Utc::now() },
///     "liquid",
/// );
/// history.record(
///     StateTransition { from: 1, to: 2, transition: None, timestamp: Utc::now() },
///     "gas",
/// );
///
/// assert_eq!(history.entities(), ["liquid", "gas"]);
/// assert_eq!(history.path(), vec![0, 1, 2]);
/// assert_eq!(history.last(), Some(&"gas"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<E> {
    run_id: Uuid,
    entities: Vec<E>,
    transitions: Vec<StateTransition>,
}

impl<E> StateHistory<E> {
    /// Create an empty history for the given run.
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            entities: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Append a committed entity together with its transition record.
    pub fn record(&mut self, transition: StateTransition, entity: E) {
        self.transitions.push(transition);
        self.entities.push(entity);
    }

    /// Identifier of the run this history belongs to.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Committed entities in chronological order.
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Transition records in chronological order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Most recently committed entity.
    pub fn last(&self) -> Option<&E> {
        self.entities.last()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// State indices traversed: the first origin, then every destination.
    ///
    /// Empty when nothing has been committed yet.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and the last commit.
    ///
    /// Returns `None` if there are no commits.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
