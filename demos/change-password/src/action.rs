//! Application actions
//!
//! Naming follows the intent/result convention: `SubmitPressed` is the
//! intent that starts the async password change, `SubmitDidComplete` /
//! `SubmitDidError` carry the backend's outcome back into the reducer.

/// Everything that can happen in the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A field widget produced a new value.
    Input {
        field: &'static str,
        value: String,
    },

    /// Move focus to the next/previous widget.
    FocusNext,
    FocusPrev,

    /// Intent: start the async password change.
    SubmitPressed,

    /// Result: the backend accepted the change.
    SubmitDidComplete,

    /// Result: the backend rejected the change.
    SubmitDidError(String),

    /// Restore the focused field to its initial value.
    ResetField,

    /// Restore the whole form.
    ResetForm,

    /// Switch between dark and light chrome.
    ThemeToggle,

    /// Exit the application.
    Quit,
}
