//! Declarative field schemas

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Current values of every field, keyed by field name.
///
/// Validators receive the full map so they can express cross-field rules
/// (e.g. "must match the other passphrase"), and the submit callback
/// receives a snapshot of it.
pub type FieldValues = HashMap<String, String>;

/// A validator maps (current value, all current values) to an error message.
///
/// Returning the empty string means the value is valid. Validators are
/// shared closures so a schema can be cloned cheaply.
pub type Validator = Arc<dyn Fn(&str, &FieldValues) -> String + Send + Sync>;

/// Declarative definition of a single form field.
///
/// Built with a builder-style API:
///
/// ```
/// use tui_form_core::FieldDef;
///
/// let field = FieldDef::new("username")
///     .required()
///     .validator(|value, _| {
///         if value.len() < 3 {
///             "Username must be at least 3 characters long".into()
///         } else {
///             String::new()
///         }
///     });
/// assert_eq!(field.name(), "username");
/// assert!(field.is_required());
/// ```
#[derive(Clone)]
pub struct FieldDef {
    name: String,
    initial_value: String,
    required: bool,
    validator: Option<Validator>,
}

impl FieldDef {
    /// Create a field with an empty initial value, not required, no validator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: String::new(),
            required: false,
            validator: None,
        }
    }

    /// Set the value the field starts with (and resets back to).
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Mark the field as required: an empty value makes the form invalid.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a validator. Return the empty string for a valid value.
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &FieldValues) -> String + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// The field's name (its key in values/errors/dirty maps).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value the field starts with.
    pub fn initial(&self) -> &str {
        &self.initial_value
    }

    /// Whether an empty value makes the form invalid.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The attached validator, if any.
    pub fn get_validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("initial_value", &self.initial_value)
            .field("required", &self.required)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// An ordered collection of field definitions.
///
/// Declaration order is preserved so consumers can lay fields out (and cycle
/// focus) in the order they were declared. The schema is immutable for the
/// lifetime of an engine instance.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    fields: Vec<FieldDef>,
}

impl FormSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keeping declaration order.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_def_defaults() {
        let field = FieldDef::new("email");
        assert_eq!(field.name(), "email");
        assert_eq!(field.initial(), "");
        assert!(!field.is_required());
        assert!(field.get_validator().is_none());
    }

    #[test]
    fn test_field_def_builder() {
        let field = FieldDef::new("email")
            .initial_value("a@b.c")
            .required()
            .validator(|v, _| {
                if v.contains('@') {
                    String::new()
                } else {
                    "Please enter a valid email address".into()
                }
            });

        assert_eq!(field.initial(), "a@b.c");
        assert!(field.is_required());

        let validator = field.get_validator().unwrap();
        assert_eq!(validator("a@b.c", &FieldValues::new()), "");
        assert_eq!(
            validator("nope", &FieldValues::new()),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = FormSchema::new()
            .field(FieldDef::new("first"))
            .field(FieldDef::new("second"))
            .field(FieldDef::new("third"));

        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_schema_lookup() {
        let schema = FormSchema::new()
            .field(FieldDef::new("username").required())
            .field(FieldDef::new("bio"));

        assert!(schema.contains("username"));
        assert!(!schema.contains("password"));
        assert!(schema.get("username").unwrap().is_required());
        assert!(!schema.get("bio").unwrap().is_required());
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_cross_field_validator_sees_all_values() {
        let field = FieldDef::new("verify").validator(|value, values| {
            let other = values.get("new").map(String::as_str).unwrap_or("");
            if value != other {
                "Passwords do not match".into()
            } else {
                String::new()
            }
        });

        let mut values = FieldValues::new();
        values.insert("new".into(), "123456".into());
        values.insert("verify".into(), "654321".into());

        let validator = field.get_validator().unwrap();
        assert_eq!(validator("654321", &values), "Passwords do not match");
        assert_eq!(validator("123456", &values), "");
    }
}
