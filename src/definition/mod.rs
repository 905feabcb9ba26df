//! Declarative machine definitions.
//!
//! States and transitions are immutable once built and can be reused by as
//! many restarts as the caller likes.

mod state;
mod transition;

pub use state::{Identifier, State, StateEntry, StateOptions};
pub use transition::{
    EntityGenerator, Transition, TransitionEntry, TransitionHook, TransitionOptions,
};
