//! Machine execution.
//!
//! A machine holds the only mutable state of the engine: the current state
//! index, the history and the running result. Every operation runs to
//! completion synchronously; hooks are called in-line and anything they
//! panic with reaches the caller of `go`/`run` unchanged.

mod executor;
mod options;
mod validation;

pub use executor::Machine;
pub use options::{CommitObserver, MachineOptions, ResultFold, Trigger, TriggerObserver};
