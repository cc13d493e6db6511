//! Live form state owned by the engine
//!
//! State is immutable from the consumer's perspective: rendering code reads
//! it through the engine's accessors, and only the engine's reducer mutates
//! it. Snapshots are `Serialize` so hosts can log or persist them.

use std::collections::HashMap;

use serde::Serialize;

use crate::schema::{FieldValues, FormSchema};

/// Canonical message for an empty required field.
///
/// The required-empty check always wins over a validator's own message, so
/// consumers can rely on this exact string.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Validation outcome for a single field.
///
/// Always a data value for the caller to render, never an `Err`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Whether the field currently fails validation.
    pub has_error: bool,
    /// Human-readable message; empty when `has_error` is false.
    pub message: String,
}

impl FieldError {
    /// No error.
    pub fn clear() -> Self {
        Self::default()
    }

    /// The canonical required-empty error.
    pub fn required() -> Self {
        Self {
            has_error: true,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }

    /// An error with a validator-supplied message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            message: message.into(),
        }
    }
}

/// Everything a form knows at one instant.
///
/// The `values`, `dirty`, and `errors` maps always carry exactly the
/// schema's key set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormState {
    /// Current value of every field.
    pub values: FieldValues,

    /// True for fields edited at least once since init/reset.
    pub dirty: HashMap<String, bool>,

    /// Validation outcome of every field.
    pub errors: HashMap<String, FieldError>,

    /// True after the first edit anywhere in the form.
    pub touched: bool,

    /// True while a submit callback's result is pending.
    pub submitting: bool,

    /// True after a successful submit completes.
    pub submitted: bool,
}

impl FormState {
    /// Fresh state for a schema: initial values, clear errors, nothing dirty.
    pub fn from_schema(schema: &FormSchema) -> Self {
        let mut values = FieldValues::new();
        let mut dirty = HashMap::new();
        let mut errors = HashMap::new();

        for def in schema.iter() {
            values.insert(def.name().to_string(), def.initial().to_string());
            dirty.insert(def.name().to_string(), false);
            errors.insert(def.name().to_string(), FieldError::clear());
        }

        Self {
            values,
            dirty,
            errors,
            touched: false,
            submitting: false,
            submitted: false,
        }
    }

    /// Current value of one field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Validation outcome of one field.
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// Whether one field has been edited since init/reset.
    pub fn is_field_dirty(&self, name: &str) -> bool {
        self.dirty.get(name).copied().unwrap_or(false)
    }

    /// Whether any field has been edited since init/reset (or last
    /// successful submit, which clears the flags).
    pub fn any_dirty(&self) -> bool {
        self.dirty.values().any(|d| *d)
    }
}
