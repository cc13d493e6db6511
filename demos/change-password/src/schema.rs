//! The password-change form model

use tui_form::prelude::*;

pub const CURRENT: &str = "current_passphrase";
pub const NEW: &str = "new_passphrase";
pub const VERIFY: &str = "verify_passphrase";

/// Three passphrase fields; the new/verify pair validate against each other
/// and against the current passphrase.
pub fn passphrase_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldDef::new(CURRENT).required())
        .field(FieldDef::new(NEW).required().validator(|value, values| {
            let current = values.get(CURRENT).map(String::as_str).unwrap_or("");
            let verify = values.get(VERIFY).map(String::as_str).unwrap_or("");
            if value == current {
                "New password must be different from current password".into()
            } else if value.len() <= 5 {
                "Password must be at least 6 characters long".into()
            } else if value != verify {
                "Passwords do not match".into()
            } else {
                String::new()
            }
        }))
        .field(FieldDef::new(VERIFY).required().validator(|value, values| {
            let new = values.get(NEW).map(String::as_str).unwrap_or("");
            if value != new {
                "Passwords do not match".into()
            } else {
                String::new()
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_form::testing::change;

    #[test]
    fn test_new_must_differ_from_current() {
        let mut form = Form::new(passphrase_schema());

        form.handle_change(change(CURRENT, "hunter2"));
        form.handle_change(change(NEW, "hunter2"));

        assert_eq!(
            form.error(NEW).unwrap().message,
            "New password must be different from current password"
        );
    }

    #[test]
    fn test_new_minimum_length() {
        let mut form = Form::new(passphrase_schema());

        form.handle_change(change(CURRENT, "hunter2"));
        form.handle_change(change(NEW, "12345"));

        assert_eq!(
            form.error(NEW).unwrap().message,
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_verify_must_match_new() {
        let mut form = Form::new(passphrase_schema());

        form.handle_change(change(CURRENT, "hunter2"));
        form.handle_change(change(NEW, "123456"));
        form.handle_change(change(VERIFY, "654321"));

        assert_eq!(form.error(VERIFY).unwrap().message, "Passwords do not match");
    }

    #[test]
    fn test_matching_pair_is_valid() {
        let mut form = Form::new(passphrase_schema());

        form.handle_change(change(CURRENT, "hunter2"));
        form.handle_change(change(NEW, "123456"));
        form.handle_change(change(VERIFY, "123456"));

        assert!(!form.is_disabled());
    }
}
