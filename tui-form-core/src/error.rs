//! Submit-failure error type

use thiserror::Error;

/// Outcome of a submit callback.
pub type SubmitResult = Result<(), SubmitError>;

/// Failure reported by a submit callback.
///
/// The engine never swallows this: it resets the submitting flag and hands
/// the error back to the caller, leaving the form editable and
/// resubmittable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    /// Wrap a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
