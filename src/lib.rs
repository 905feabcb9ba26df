//! fsm-engine: an embeddable finite state machine engine
//!
//! The caller describes states and their transitions declaratively and feeds
//! the machine input entities (characters, tokens, events). The engine
//! decides whether an entity triggers a valid transition, fires hooks, folds
//! an optional running result and records the full history.
//!
//! # Core Concepts
//!
//! - **Transition**: one edge out of a state, with an acceptance test, a
//!   candidate rule and an optional hook
//! - **State**: an identity test plus an ordered list of transitions
//! - **Machine**: the executor holding the current state, history and result
//!
//! Lookups are linear and ordered: the first accepting transition and the
//! first matching destination state win.
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{Machine, MachineOptions, State, Transition};
//!
//! let letter = Transition::builder()
//!     .to("letter")
//!     .can_transite(|c: &&str| c.chars().all(|c| c.is_ascii_alphabetic()))
//!     .build()
//!     .unwrap();
//! let symbol = Transition::builder()
//!     .to("symbol")
//!     .can_transite(|c: &&str| c.chars().all(|c| c.is_ascii_alphanumeric()))
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::with_options(
//!     [
//!         State::anonymous().transition(letter).initial(),
//!         State::new("letter").transition(symbol.clone()),
//!         State::new("symbol").transition(symbol),
//!     ],
//!     MachineOptions::new()
//!         .init_result(String::new())
//!         .calculate_result(|memo: &String, next: &&str| format!("{memo}{next}")),
//! )
//! .unwrap();
//!
//! for c in ["v", "a", "r", "1", "2", "3"] {
//!     assert!(machine.go(c));
//! }
//! assert_eq!(machine.result(), "var123");
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Entity, Guard, StateHistory, StateTransition};
pub use builder::{MachineBuilder, TransitionBuilder};
pub use definition::{
    Identifier, State, StateEntry, StateOptions, Transition, TransitionEntry, TransitionOptions,
};
pub use error::ConfigurationError;
pub use machine::{Machine, MachineOptions, Trigger};
