//! Machine configuration: result folding and notification hooks.

use std::fmt;

/// What triggered a step: an input entity (`go`) or a transition name
/// (`run`).
pub enum Trigger<'a, E> {
    Entity(&'a E),
    Named(&'a str),
}

impl<'a, E> Trigger<'a, E> {
    /// The input entity, `None` for named steps.
    pub fn entity(&self) -> Option<&'a E> {
        match *self {
            Trigger::Entity(entity) => Some(entity),
            Trigger::Named(_) => None,
        }
    }

    /// The transition name, `None` for entity steps.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Trigger::Entity(_) => None,
            Trigger::Named(name) => Some(name),
        }
    }
}

impl<E> Clone for Trigger<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Trigger<'_, E> {}

impl<E: fmt::Debug> fmt::Debug for Trigger<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Entity(entity) => f.debug_tuple("Entity").field(entity).finish(),
            Trigger::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

/// Folds each committed entity into the running result.
pub type ResultFold<E, R> = Box<dyn Fn(&R, &E) -> R + Send + Sync>;

/// Observes a commit: last committed entity (if any), then the new one.
pub type CommitObserver<E> = Box<dyn Fn(Option<&E>, &E) + Send + Sync>;

/// Observes a step by its trigger: last committed entity (if any), then
/// what triggered the step.
pub type TriggerObserver<E> = Box<dyn for<'a> Fn(Option<&'a E>, Trigger<'a, E>) + Send + Sync>;

/// Optional machine configuration.
///
/// # Example
///
/// ```rust
/// use fsm_engine::MachineOptions;
///
/// let options: MachineOptions<char, String> = MachineOptions::new()
///     .init_result(String::new())
///     .calculate_result(|memo: &String, c: &char| format!("{memo}{c}"));
/// ```
pub struct MachineOptions<E, R> {
    pub(crate) init_result: R,
    pub(crate) calculate_result: Option<ResultFold<E, R>>,
    pub(crate) on_transition: Option<CommitObserver<E>>,
    pub(crate) on_unhandled_transition: Option<TriggerObserver<E>>,
    pub(crate) on_unsupported_transition: Option<TriggerObserver<E>>,
}

impl<E, R: Default> MachineOptions<E, R> {
    /// Options seeded with `R::default()`.
    pub fn new() -> Self {
        Self::seeded(R::default())
    }
}

impl<E, R> MachineOptions<E, R> {
    /// Options seeded with `init`, for result types without a default.
    pub fn seeded(init: R) -> Self {
        Self {
            init_result: init,
            calculate_result: None,
            on_transition: None,
            on_unhandled_transition: None,
            on_unsupported_transition: None,
        }
    }

    /// Seed of the result, used at construction and on every restart.
    pub fn init_result(mut self, init: R) -> Self {
        self.init_result = init;
        self
    }

    /// Fold applied to the result on every commit.
    pub fn calculate_result<F>(mut self, fold: F) -> Self
    where
        F: Fn(&R, &E) -> R + Send + Sync + 'static,
    {
        self.calculate_result = Some(Box::new(fold));
        self
    }

    /// Called on every commit with the previous and the committed entity.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<&E>, &E) + Send + Sync + 'static,
    {
        self.on_transition = Some(Box::new(hook));
        self
    }

    /// Called on commits whose transition has no hook of its own.
    pub fn on_unhandled_transition<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(Option<&'a E>, Trigger<'a, E>) + Send + Sync + 'static,
    {
        self.on_unhandled_transition = Some(Box::new(hook));
        self
    }

    /// Called whenever a step is refused.
    pub fn on_unsupported_transition<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(Option<&'a E>, Trigger<'a, E>) + Send + Sync + 'static,
    {
        self.on_unsupported_transition = Some(Box::new(hook));
        self
    }
}

impl<E, R: Clone> MachineOptions<E, R> {
    pub(crate) fn initial_result(&self) -> R {
        self.init_result.clone()
    }
}

impl<E, R: Default> Default for MachineOptions<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_exposes_entity_or_name() {
        let entity = "gas";
        let by_entity = Trigger::Entity(&entity);
        let by_name: Trigger<'_, &str> = Trigger::Named("freeze");

        assert_eq!(by_entity.entity(), Some(&"gas"));
        assert_eq!(by_entity.name(), None);
        assert_eq!(by_name.entity(), None);
        assert_eq!(by_name.name(), Some("freeze"));
    }

    #[test]
    fn initial_result_defaults_when_unset() {
        let options: MachineOptions<char, String> = MachineOptions::new();
        assert_eq!(options.initial_result(), "");

        let seeded: MachineOptions<char, u32> = MachineOptions::new().init_result(7);
        assert_eq!(seeded.initial_result(), 7);
    }

    #[test]
    fn seeded_accepts_result_without_default() {
        #[derive(Clone, Debug, PartialEq)]
        struct Depth(usize);

        let options: MachineOptions<char, Depth> = MachineOptions::seeded(Depth(3));
        assert_eq!(options.initial_result(), Depth(3));
    }

    #[test]
    fn fold_is_stored() {
        let options: MachineOptions<char, usize> =
            MachineOptions::new().calculate_result(|count: &usize, _: &char| count + 1);

        let fold = options.calculate_result.as_ref().unwrap();
        assert_eq!(fold(&1, &'x'), 2);
    }
}
