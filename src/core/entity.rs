//! The `Entity` trait for values fed into a machine.
//!
//! The engine never looks inside an entity. It only clones it into the
//! history, compares it against literal targets and identifiers, and prints
//! it in log events.

use std::fmt::Debug;

/// Trait for input entities (characters, tokens, events).
///
/// Blanket-implemented for every type that is `Clone + PartialEq + Debug`,
/// so callers never implement it by hand.
///
/// # Required Traits
///
/// - `Clone`: committed entities are copied into the history
/// - `PartialEq`: literal targets and identifiers match by equality
/// - `Debug`: entities appear in log events
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Entity;
///
/// fn accepts_entity<E: Entity>(_entity: E) {}
///
/// accepts_entity('v');
/// accepts_entity("liquid");
/// accepts_entity(String::from("gas"));
/// ```
pub trait Entity: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Entity for T {}
