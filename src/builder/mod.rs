//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and a macro for declaring states
//! and transitions with minimal boilerplate.

pub mod machine;
pub mod macros;
pub mod transition;

pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::Guard;
use crate::definition::Transition;

/// Create a named transition to a fixed target.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::named_transition;
///
/// let freeze = named_transition("freeze", "solid");
/// assert_eq!(freeze.name(), Some("freeze"));
/// assert!(freeze.accepts(&"solid"));
/// ```
pub fn named_transition<E>(name: impl Into<String>, to: E) -> Transition<E> {
    Transition::target(to).with_name(name)
}

/// Create a transition to `to` that accepts input by predicate.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::guarded_transition;
///
/// let letter = guarded_transition('l', |c: &char| c.is_ascii_alphabetic());
/// assert!(letter.accepts(&'v'));
/// assert!(!letter.accepts(&'1'));
/// assert_eq!(letter.resolve_candidate(), Some('l'));
/// ```
pub fn guarded_transition<E, F>(to: E, predicate: F) -> Transition<E>
where
    F: Fn(&E) -> bool + Send + Sync + 'static,
{
    Transition::target(to).with_guard(Guard::new(predicate))
}
