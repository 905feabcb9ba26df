//! State-list validation using Validation.
//!
//! Every entry is checked before construction fails, so the error names all
//! offending positions at once instead of only the first.

use crate::definition::{State, StateEntry};
use crate::error::ConfigurationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a single entry. A bare value has no identity test.
fn check_entry<E>(position: usize, entry: &StateEntry<E>) -> Validation<(), NonEmptyVec<usize>> {
    match entry {
        StateEntry::State(_) => Validation::success(()),
        StateEntry::Bare(_) => Validation::fail(position),
    }
}

/// Validate the list handed to a machine and unwrap it into states.
pub(crate) fn validate_states<E>(
    entries: Vec<StateEntry<E>>,
) -> Result<Vec<State<E>>, ConfigurationError> {
    if entries.is_empty() {
        return Err(ConfigurationError::EmptyStateList);
    }

    let checks: Vec<Validation<(), NonEmptyVec<usize>>> = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| check_entry(position, entry))
        .collect();

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                StateEntry::State(state) => Some(state),
                StateEntry::Bare(_) => None,
            })
            .collect()),
        Validation::Failure(positions) => Err(ConfigurationError::MissingIdentifier {
            positions: positions.iter().copied().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_described_states() {
        let entries = vec![
            StateEntry::from(State::new("solid").to("liquid")),
            StateEntry::from(State::new("liquid")),
        ];

        let states = validate_states(entries).unwrap();
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn accumulates_all_bare_positions() {
        let entries = vec![
            StateEntry::Bare("test"),
            StateEntry::from(State::new("liquid")),
            StateEntry::Bare("other"),
        ];

        let result = validate_states(entries);
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::MissingIdentifier {
                positions: vec![0, 2]
            }
        );
    }

    #[test]
    fn rejects_empty_list() {
        let result = validate_states::<&str>(Vec::new());
        assert_eq!(result.unwrap_err(), ConfigurationError::EmptyStateList);
    }
}
