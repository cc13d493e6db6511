//! The form-state engine
//!
//! [`Form`] owns a [`FormSchema`] and the live [`FormState`] derived from
//! it. All mutations are described as [`FormAction`]s and applied by a
//! single reducer; every handler returns `true` when observable state
//! changed, which is the host's re-render signal.
//!
//! # Example
//!
//! ```
//! use tui_form_core::{ChangeEvent, FieldDef, Form, FormSchema};
//!
//! let schema = FormSchema::new().field(FieldDef::new("username").required());
//! let mut form = Form::new(schema);
//!
//! assert!(form.is_disabled()); // pristine forms cannot submit
//!
//! form.handle_change(ChangeEvent::new("username", "ada"));
//! assert_eq!(form.value("username"), Some("ada"));
//! assert!(!form.is_disabled());
//! ```

use std::collections::HashMap;
use std::future::Future;

use crate::action::FormAction;
use crate::error::{SubmitError, SubmitResult};
use crate::event::{ChangeEvent, SubmitEvent};
use crate::observe::{FormObserver, ObserverList};
use crate::schema::{FieldDef, FieldValues, FormSchema};
use crate::state::{FieldError, FormState};

/// Form-state engine: schema, live state, and the operations that connect
/// them.
///
/// One instance per form; instances own independent state. All mutating
/// operations take `&mut self`, so the host's event loop serializes them.
#[derive(Debug)]
pub struct Form {
    schema: FormSchema,
    state: FormState,
    observers: ObserverList,
}

impl Form {
    /// Create an engine with fresh state for the schema: initial values,
    /// clear errors, nothing dirty, all lifecycle flags false.
    pub fn new(schema: FormSchema) -> Self {
        let state = FormState::from_schema(&schema);
        Self {
            schema,
            state,
            observers: ObserverList::new(),
        }
    }

    /// Register an observer for every applied action.
    pub fn add_observer<O: FormObserver + 'static>(&mut self, observer: O) {
        self.observers.add(observer);
    }

    /// The schema this engine was built from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Snapshot of the live state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current values of all fields.
    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    /// Validation outcome of all fields.
    pub fn errors(&self) -> &HashMap<String, FieldError> {
        &self.state.errors
    }

    /// Current value of one field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.state.value(name)
    }

    /// Validation outcome of one field.
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.state.error(name)
    }

    /// Whether any field has been edited since init/reset (cleared again by
    /// a successful submit).
    pub fn is_dirty(&self) -> bool {
        self.state.any_dirty()
    }

    /// Whether anything has been edited since init/reset.
    pub fn is_touched(&self) -> bool {
        self.state.touched
    }

    /// Whether a submit callback's result is pending.
    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Whether a submit completed successfully.
    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    /// True if any field has an error, or any required field is empty.
    pub fn is_form_invalid(&self) -> bool {
        let has_errors = self.state.errors.values().any(|e| e.has_error);
        let required_empty = self.schema.iter().filter(|f| f.is_required()).any(|f| {
            self.state
                .values
                .get(f.name())
                .map(|v| v.is_empty())
                .unwrap_or(true)
        });
        has_errors || required_empty
    }

    /// Submit gate for the host's submit control: disabled until the form
    /// has been touched and is valid.
    pub fn is_disabled(&self) -> bool {
        !self.state.touched || self.is_form_invalid()
    }

    /// Apply a field edit.
    ///
    /// Unknown field names are ignored silently. Re-delivering the current
    /// value of an already-dirty field is skipped entirely. Otherwise the
    /// form becomes touched, the value is stored, the field marked dirty,
    /// and every dirty field is re-validated.
    ///
    /// Returns `true` when observable state changed.
    pub fn handle_change(&mut self, event: ChangeEvent) -> bool {
        self.apply(FormAction::FieldChange {
            name: event.name,
            value: event.value,
        })
    }

    /// Start a submit attempt.
    ///
    /// The event's `prevent_default` runs first, always. If the form is
    /// invalid the attempt aborts with `None` and no state change; otherwise
    /// the form is marked submitting and a snapshot of the values is
    /// returned for the caller to hand to its submit callback. Complete the
    /// attempt with [`finish_submit`](Self::finish_submit) once the callback
    /// resolves.
    pub fn begin_submit(&mut self, mut event: SubmitEvent) -> Option<FieldValues> {
        event.prevent_default();
        if self.is_form_invalid() {
            return None;
        }
        self.apply(FormAction::SubmitBegin);
        Some(self.state.values.clone())
    }

    /// Complete a submit attempt with the callback's outcome.
    ///
    /// On success the form is marked submitted and every dirty flag is
    /// cleared. On failure the error is handed back untouched, with prior
    /// dirty/error state intact so the form stays editable and
    /// resubmittable. The submitting flag is reset in both cases.
    pub fn finish_submit(&mut self, result: SubmitResult) -> Result<bool, SubmitError> {
        match result {
            Ok(()) => {
                self.apply(FormAction::SubmitDidComplete);
                Ok(true)
            }
            Err(err) => {
                self.apply(FormAction::SubmitDidError);
                Err(err)
            }
        }
    }

    /// Run a full submit attempt against a callback.
    ///
    /// Composes [`begin_submit`](Self::begin_submit) and
    /// [`finish_submit`](Self::finish_submit): the submitting flag is true
    /// while the callback's future is pending and false in every return
    /// path. Returns `Ok(false)` when the form was invalid and nothing
    /// happened, `Ok(true)` after a successful submit, and the callback's
    /// error otherwise.
    pub async fn handle_submit<F, Fut>(
        &mut self,
        event: SubmitEvent,
        on_submit: F,
    ) -> Result<bool, SubmitError>
    where
        F: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = SubmitResult>,
    {
        let Some(values) = self.begin_submit(event) else {
            return Ok(false);
        };
        let result = on_submit(values).await;
        self.finish_submit(result)
    }

    /// Restore the whole form to its pristine state.
    pub fn reset_form(&mut self) -> bool {
        self.apply(FormAction::FormReset)
    }

    /// Restore one field to its schema initial value, clearing its error
    /// and dirty flag. Other fields and the lifecycle flags are left
    /// untouched. Unknown field names are ignored silently.
    pub fn reset_field(&mut self, name: &str) -> bool {
        self.apply(FormAction::FieldReset {
            name: name.to_string(),
        })
    }

    /// Apply one action through the observers and the reducer.
    fn apply(&mut self, action: FormAction) -> bool {
        self.observers.before_apply(&action);
        let changed = reduce(&self.schema, &mut self.state, &action);
        self.observers.after_apply(&action, changed);
        changed
    }
}

/// The reducer: applies one action to the state.
///
/// Returns `true` if observable state changed and a re-render is needed.
fn reduce(schema: &FormSchema, state: &mut FormState, action: &FormAction) -> bool {
    match action {
        FormAction::FieldChange { name, value } => {
            if !schema.contains(name) {
                return false; // unknown field: ignored silently
            }
            let already_dirty = state.is_field_dirty(name);
            if already_dirty && state.value(name) == Some(value.as_str()) {
                return false; // same value on a dirty field: skip entirely
            }
            state.touched = true;
            state.values.insert(name.clone(), value.clone());
            if !already_dirty {
                state.dirty.insert(name.clone(), true);
            }
            validate_dirty_fields(schema, state);
            true
        }

        FormAction::FieldReset { name } => {
            let Some(def) = schema.get(name) else {
                return false;
            };
            let mut changed = false;
            if state.value(name) != Some(def.initial()) {
                state.values.insert(name.clone(), def.initial().to_string());
                changed = true;
            }
            if state.errors.get(name).is_some_and(|e| e.has_error) {
                state.errors.insert(name.clone(), FieldError::clear());
                changed = true;
            }
            if state.is_field_dirty(name) {
                state.dirty.insert(name.clone(), false);
                changed = true;
            }
            changed
        }

        FormAction::FormReset => {
            let fresh = FormState::from_schema(schema);
            if *state == fresh {
                return false;
            }
            *state = fresh;
            true
        }

        FormAction::SubmitBegin => {
            state.submitting = true;
            true
        }

        FormAction::SubmitDidComplete => {
            state.submitted = true;
            state.submitting = false;
            for flag in state.dirty.values_mut() {
                *flag = false;
            }
            true
        }

        FormAction::SubmitDidError => {
            state.submitting = false;
            true
        }
    }
}

/// Re-validate every dirty field against the current values.
///
/// Returns `true` if any stored error changed. Errors are rewritten only
/// when the freshly computed error differs from the stored one.
fn validate_dirty_fields(schema: &FormSchema, state: &mut FormState) -> bool {
    if !state.touched {
        return false;
    }
    let mut changed = false;
    for def in schema.iter() {
        if !state.is_field_dirty(def.name()) {
            continue;
        }
        let value = state.value(def.name()).unwrap_or_default().to_string();
        let error = validate_field(def, &value, &state.values);
        if state.errors.get(def.name()) != Some(&error) {
            state.errors.insert(def.name().to_string(), error);
            changed = true;
        }
    }
    changed
}

/// Validate one field.
///
/// The required-empty check wins over a validator's own message, so an
/// empty required field always carries the canonical required message.
fn validate_field(def: &FieldDef, value: &str, values: &FieldValues) -> FieldError {
    if def.is_required() && value.is_empty() {
        return FieldError::required();
    }
    if let Some(validator) = def.get_validator() {
        let message = validator(value, values);
        if message.is_empty() {
            return FieldError::clear();
        }
        // A validator complaint about an empty value still surfaces as the
        // canonical required message.
        if value.is_empty() {
            return FieldError::required();
        }
        return FieldError::message(message);
    }
    FieldError::clear()
}
