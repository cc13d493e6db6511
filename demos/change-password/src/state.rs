//! Application state: the form engine plus app chrome

use tui_form::prelude::*;

use crate::schema::{self, CURRENT, NEW, VERIFY};
use crate::theme::Theme;

/// Which widget receives keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Current,
    New,
    Verify,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Current => Focus::New,
            Focus::New => Focus::Verify,
            Focus::Verify => Focus::Button,
            Focus::Button => Focus::Current,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Current => Focus::Button,
            Focus::New => Focus::Current,
            Focus::Verify => Focus::New,
            Focus::Button => Focus::Verify,
        }
    }

    /// The form field behind this focus target, if it is a field.
    pub fn field_name(self) -> Option<&'static str> {
        match self {
            Focus::Current => Some(CURRENT),
            Focus::New => Some(NEW),
            Focus::Verify => Some(VERIFY),
            Focus::Button => None,
        }
    }
}

/// Everything the UI needs to render.
pub struct AppState {
    /// The form engine: values, errors, lifecycle flags.
    pub form: Form,

    /// Which widget receives keys.
    pub focus: Focus,

    /// Chrome color scheme.
    pub theme: Theme,

    /// Outcome message of the last submit attempt, if any.
    pub status: Option<Status>,
}

/// Outcome of the last submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Failure(String),
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        let mut form = Form::new(schema::passphrase_schema());
        form.add_observer(LoggingObserver::new());
        Self {
            form,
            focus: Focus::default(),
            theme,
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_widgets() {
        let mut focus = Focus::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Current);
        assert_eq!(
            seen,
            vec![Focus::Current, Focus::New, Focus::Verify, Focus::Button]
        );
    }

    #[test]
    fn test_prev_inverts_next() {
        for focus in [Focus::Current, Focus::New, Focus::Verify, Focus::Button] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Theme::Dark);
        assert!(state.form.is_disabled());
        assert_eq!(state.focus, Focus::Current);
        assert_eq!(state.status, None);
    }
}
