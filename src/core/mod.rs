//! Core value types shared by definitions and the machine.
//!
//! - The `Entity` trait for caller-supplied input values
//! - Guard predicates used for acceptance and identification
//! - History tracking of committed transitions

mod entity;
mod guard;
mod history;

pub use entity::Entity;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
