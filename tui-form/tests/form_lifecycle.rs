//! End-to-end lifecycle tests through the public API.

use std::time::Duration;

use tui_form::prelude::*;
use tui_form::testing::{accept, change, submit};

/// The password-change model: three passphrase fields, two of them with
/// cross-field validators.
fn passphrase_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldDef::new("current_passphrase").required())
        .field(
            FieldDef::new("new_passphrase")
                .required()
                .validator(|value, values| {
                    let current = values
                        .get("current_passphrase")
                        .map(String::as_str)
                        .unwrap_or("");
                    let verify = values
                        .get("verify_passphrase")
                        .map(String::as_str)
                        .unwrap_or("");
                    if value == current {
                        "New password must be different from current password".into()
                    } else if value.len() <= 5 {
                        "Password must be at least 6 characters long".into()
                    } else if value != verify {
                        "Passwords do not match".into()
                    } else {
                        String::new()
                    }
                }),
        )
        .field(
            FieldDef::new("verify_passphrase")
                .required()
                .validator(|value, values| {
                    let new = values
                        .get("new_passphrase")
                        .map(String::as_str)
                        .unwrap_or("");
                    if value != new {
                        "Passwords do not match".into()
                    } else {
                        String::new()
                    }
                }),
        )
}

#[tokio::test]
async fn change_password_happy_path() {
    let mut form = Form::new(passphrase_schema());
    assert!(form.is_disabled());

    form.handle_change(change("current_passphrase", "123457"));
    form.handle_change(change("new_passphrase", "123456"));
    form.handle_change(change("verify_passphrase", "123456"));

    assert!(form.errors().values().all(|e| !e.has_error));
    assert!(!form.is_disabled());

    let result = form
        .handle_submit(submit(), |values| async move {
            // Simulated backend round-trip.
            tokio::time::sleep(Duration::from_millis(5)).await;
            assert_eq!(values.get("new_passphrase").unwrap(), "123456");
            Ok(())
        })
        .await;

    assert_eq!(result, Ok(true));
    assert!(form.is_submitted());
    assert!(!form.is_submitting());
    assert!(!form.is_dirty());
}

#[tokio::test]
async fn mismatched_passphrases_block_submission() {
    let mut form = Form::new(passphrase_schema());

    form.handle_change(change("current_passphrase", "123457"));
    form.handle_change(change("new_passphrase", "123456"));
    form.handle_change(change("verify_passphrase", "654321"));

    assert_eq!(
        form.error("verify_passphrase").unwrap().message,
        "Passwords do not match"
    );
    assert!(form.is_disabled());

    let result = form.handle_submit(submit(), accept).await;
    assert_eq!(result, Ok(false));
    assert!(!form.is_submitted());
}

#[tokio::test]
async fn failed_submit_leaves_form_resubmittable() {
    let mut form = Form::new(passphrase_schema());

    form.handle_change(change("current_passphrase", "wrong"));
    form.handle_change(change("new_passphrase", "7654321"));
    form.handle_change(change("verify_passphrase", "7654321"));

    let result = form
        .handle_submit(submit(), |_| async {
            Err(SubmitError::new("Current password is incorrect"))
        })
        .await;

    assert_eq!(
        result,
        Err(SubmitError::new("Current password is incorrect"))
    );
    assert!(!form.is_submitting());
    assert!(!form.is_submitted());
    assert!(form.is_dirty());

    // Fix the offending value and resubmit.
    form.handle_change(change("current_passphrase", "123457"));
    let result = form.handle_submit(submit(), accept).await;
    assert_eq!(result, Ok(true));
    assert!(form.is_submitted());
}

#[tokio::test]
async fn host_driven_submission_shows_submitting_state() {
    let mut form = Form::new(passphrase_schema());

    form.handle_change(change("current_passphrase", "123457"));
    form.handle_change(change("new_passphrase", "123456"));
    form.handle_change(change("verify_passphrase", "123456"));

    // The host begins the attempt, spawns the callback, and keeps rendering
    // with the submitting flag up until the result action arrives.
    let values = form.begin_submit(submit()).expect("form is valid");
    assert!(form.is_submitting());

    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(values.get("verify_passphrase").unwrap(), "123456");
        Ok(())
    });

    // Edits during submission are permitted and validated as usual.
    form.handle_change(change("current_passphrase", "123458"));
    assert!(form.is_submitting());

    let result = handle.await.expect("task completed");
    assert_eq!(form.finish_submit(result), Ok(true));
    assert!(!form.is_submitting());
    assert!(form.is_submitted());
}

#[test]
fn reset_field_then_reset_form() {
    let mut form = Form::new(passphrase_schema());

    form.handle_change(change("current_passphrase", "123457"));
    form.handle_change(change("new_passphrase", "123456"));

    form.reset_field("new_passphrase");
    assert_eq!(form.value("new_passphrase"), Some(""));
    assert_eq!(form.value("current_passphrase"), Some("123457"));
    assert!(form.is_touched());

    form.reset_form();
    assert_eq!(form.value("current_passphrase"), Some(""));
    assert!(!form.is_touched());
    assert!(form.is_disabled());
}
