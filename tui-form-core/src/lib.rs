//! Core form-state engine for tui-form
//!
//! This crate provides the state machine behind a form: field values,
//! per-field dirtiness, validation errors, and the submission lifecycle,
//! with derived state (form validity, submit gating) recomputed in response
//! to field edits and submit attempts.
//!
//! # Core Concepts
//!
//! - **FormSchema**: declarative definition of fields, initial values,
//!   required-ness, and optional validators
//! - **Form**: the engine; owns the live state, applies every mutation
//!   through a single reducer
//! - **FormAction**: events that describe state changes
//! - **FormObserver**: hooks around action application (logging,
//!   instrumentation)
//!
//! The engine is UI-framework-agnostic: it depends on no terminal or
//! rendering crate. Hosts feed it [`ChangeEvent`]/[`SubmitEvent`] carriers
//! and re-render whenever a handler returns `true`.
//!
//! # Basic Example
//!
//! ```
//! use tui_form_core::{ChangeEvent, FieldDef, Form, FormSchema};
//!
//! let schema = FormSchema::new()
//!     .field(FieldDef::new("username").required())
//!     .field(FieldDef::new("email").required().validator(|value, _| {
//!         if value.contains('@') {
//!             String::new()
//!         } else {
//!             "Please enter a valid email address".into()
//!         }
//!     }));
//!
//! let mut form = Form::new(schema);
//! assert!(form.is_disabled());
//!
//! let needs_render = form.handle_change(ChangeEvent::new("email", "ada"));
//! assert!(needs_render);
//! assert_eq!(
//!     form.error("email").unwrap().message,
//!     "Please enter a valid email address"
//! );
//! ```
//!
//! # Submitting
//!
//! Submission follows a two-phase intent/result pattern. The composed
//! [`Form::handle_submit`] awaits the callback inline; hosts that want a
//! live UI while the callback runs use [`Form::begin_submit`], spawn the
//! work, and deliver the outcome back through [`Form::finish_submit`]:
//!
//! ```ignore
//! // In the action handler:
//! if let Some(values) = form.begin_submit(SubmitEvent::new()) {
//!     let tx = action_tx.clone();
//!     tokio::spawn(async move {
//!         let result = save_profile(values).await;
//!         let _ = tx.send(AppAction::SubmitDidFinish(result));
//!     });
//! }
//!
//! // When the result action arrives:
//! if let Err(err) = form.finish_submit(result) {
//!     status = Some(err.to_string());
//! }
//! ```

pub mod action;
pub mod error;
pub mod event;
pub mod form;
pub mod observe;
pub mod schema;
pub mod state;
pub mod testing;

// Core type exports
pub use action::FormAction;
pub use error::{SubmitError, SubmitResult};
pub use event::{ChangeEvent, SubmitEvent};
pub use form::Form;
pub use observe::{FormObserver, LoggingObserver, ObserverList};
pub use schema::{FieldDef, FieldValues, FormSchema, Validator};
pub use state::{FieldError, FormState, REQUIRED_MESSAGE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::FormAction;
    pub use crate::error::{SubmitError, SubmitResult};
    pub use crate::event::{ChangeEvent, SubmitEvent};
    pub use crate::form::Form;
    pub use crate::observe::{FormObserver, LoggingObserver, ObserverList};
    pub use crate::schema::{FieldDef, FieldValues, FormSchema, Validator};
    pub use crate::state::{FieldError, FormState, REQUIRED_MESSAGE};
}
