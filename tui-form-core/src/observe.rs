//! Observer hooks around action application
//!
//! Observers are the engine's instrumentation seam: they see every
//! [`FormAction`] the engine applies and whether it changed observable
//! state. Use them for logging, metrics, or test assertions — state itself
//! is only ever mutated by the engine's reducer.

use std::fmt;

use crate::action::FormAction;

/// Hook into action application.
///
/// `before_apply` runs before the reducer, `after_apply` after it with the
/// state-changed indicator (the same flag handler methods return to the
/// host as its re-render signal).
pub trait FormObserver {
    /// Called before the action reaches the reducer.
    fn before_apply(&mut self, action: &FormAction);

    /// Called after the reducer ran, with whether state changed.
    fn after_apply(&mut self, action: &FormAction, changed: bool);
}

/// Observer that logs applied actions via `tracing`.
#[derive(Clone, Debug, Default)]
pub struct LoggingObserver {
    /// Whether to log before the reducer runs.
    pub log_before: bool,
    /// Whether to log after the reducer ran.
    pub log_after: bool,
}

impl LoggingObserver {
    /// Log after application only (the common case).
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after application.
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl FormObserver for LoggingObserver {
    fn before_apply(&mut self, action: &FormAction) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Applying form action");
        }
    }

    fn after_apply(&mut self, action: &FormAction, changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                changed = changed,
                "Form action applied"
            );
        }
    }
}

/// An ordered set of observers, notified as one.
///
/// `before_apply` runs in registration order, `after_apply` in reverse
/// order for proper nesting.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn FormObserver>>,
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observer_count", &self.observers.len())
            .finish()
    }
}

impl ObserverList {
    /// An empty observer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn add<O: FormObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FormObserver for ObserverList {
    fn before_apply(&mut self, action: &FormAction) {
        for observer in &mut self.observers {
            observer.before_apply(action);
        }
    }

    fn after_apply(&mut self, action: &FormAction, changed: bool) {
        for observer in self.observers.iter_mut().rev() {
            observer.after_apply(action, changed);
        }
    }
}
