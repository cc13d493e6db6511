//! Test utilities for form-state tests
//!
//! Small constructors for the event carriers and submit callbacks, so tests
//! read as scenarios rather than plumbing:
//!
//! ```
//! use tui_form_core::testing::{accept, change, submit};
//! use tui_form_core::{FieldDef, Form, FormSchema};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut form = Form::new(FormSchema::new().field(FieldDef::new("name").required()));
//! form.handle_change(change("name", "ada"));
//! let result = form.handle_submit(submit(), accept).await;
//! assert_eq!(result, Ok(true));
//! # });
//! ```

use crate::error::{SubmitError, SubmitResult};
use crate::event::{ChangeEvent, SubmitEvent};
use crate::schema::FieldValues;

/// Build a [`ChangeEvent`] for one field.
pub fn change(name: &str, value: &str) -> ChangeEvent {
    ChangeEvent::new(name, value)
}

/// Build a [`SubmitEvent`] with a no-op `prevent_default`.
pub fn submit() -> SubmitEvent {
    SubmitEvent::new()
}

/// Submit callback that accepts any values.
pub async fn accept(_values: FieldValues) -> SubmitResult {
    Ok(())
}

/// Submit callback that rejects any values with the given message.
pub fn reject(message: &str) -> impl FnOnce(FieldValues) -> std::future::Ready<SubmitResult> {
    let err = SubmitError::new(message);
    move |_values| std::future::ready(Err(err))
}
