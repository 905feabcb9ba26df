//! Guard predicates over entities.
//!
//! Guards back both transition acceptance tests and predicate state
//! identifiers. They are shared behind an `Arc` so states and transitions
//! stay cheap to clone and reusable across restarts.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether an entity qualifies.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Guard;
///
/// let is_letter = Guard::new(|c: &char| c.is_ascii_alphabetic());
///
/// assert!(is_letter.check(&'v'));
/// assert!(!is_letter.check(&'1'));
/// ```
pub struct Guard<E> {
    predicate: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Guard<E> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic: the machine evaluates it during
    /// lookahead (`can_transite`) as well as during `go`, and expects the same
    /// answer both times.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against an entity.
    pub fn check(&self, entity: &E) -> bool {
        (self.predicate)(entity)
    }
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_matching_entities() {
        let guard = Guard::new(|e: &&str| *e == "liquid");

        assert!(guard.check(&"liquid"));
        assert!(!guard.check(&"gas"));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|c: &char| c.is_ascii_alphanumeric());

        let result1 = guard.check(&'3');
        let result2 = guard.check(&'3');

        assert_eq!(result1, result2);
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|n: &i32| *n > 10);
        let cloned = guard.clone();

        assert!(cloned.check(&11));
        assert!(!cloned.check(&10));
    }

    #[test]
    fn guard_can_use_captured_values() {
        let allowed = vec!['a', 'b'];
        let guard = Guard::new(move |c: &char| allowed.contains(c));

        assert!(guard.check(&'a'));
        assert!(!guard.check(&'z'));
    }
}
