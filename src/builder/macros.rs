//! Macros for ergonomic state construction.

/// Build a [`State`](crate::State) with shorthand targets.
///
/// # Example
///
/// ```
/// use fsm_engine::{state, Machine};
///
/// let mut machine = Machine::new([
///     state!(initial "solid" => ["liquid"]),
///     state!("liquid" => ["solid", "gas"]),
///     state!("gas" => ["liquid"]),
/// ])
/// .unwrap();
///
/// assert!(machine.go("liquid"));
/// assert!(machine.go("gas"));
/// ```
#[macro_export]
macro_rules! state {
    (initial $identifier:expr $(=> [$($target:expr),* $(,)?])?) => {
        $crate::state!($identifier $(=> [$($target),*])?).initial()
    };
    ($identifier:expr $(=> [$($target:expr),* $(,)?])?) => {
        $crate::State::new($identifier)$($(.to($target))*)?
    };
}
