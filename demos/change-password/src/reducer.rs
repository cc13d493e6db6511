//! Reducer: (state, action) -> re-render flag
//!
//! All state transitions happen here. The submit intent is the one branch
//! with a side effect: it snapshots the values via `begin_submit` and
//! spawns the backend call, whose outcome comes back as a `SubmitDid*`
//! action through the channel.

use tokio::sync::mpsc;
use tui_form::prelude::*;

use crate::action::Action;
use crate::api;
use crate::state::{AppState, Status};

/// Apply one action. Returns `true` if the UI should re-render.
pub fn reduce(
    state: &mut AppState,
    action: Action,
    tx: &mpsc::UnboundedSender<Action>,
) -> bool {
    match action {
        Action::Input { field, value } => {
            let status_cleared = state.status.take().is_some();
            let changed = state
                .form
                .handle_change(ChangeEvent::new(field, value));
            changed || status_cleared
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            true
        }

        Action::FocusPrev => {
            state.focus = state.focus.prev();
            true
        }

        Action::SubmitPressed => {
            let Some(values) = state.form.begin_submit(SubmitEvent::new()) else {
                return false; // invalid form: nothing to do
            };
            state.status = None;
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match api::change_password(values).await {
                    Ok(()) => Action::SubmitDidComplete,
                    Err(err) => Action::SubmitDidError(err.to_string()),
                };
                let _ = tx.send(action);
            });
            true // re-render to show the submitting state
        }

        Action::SubmitDidComplete => {
            let _ = state.form.finish_submit(Ok(()));
            state.status = Some(Status::Success("Password changed".into()));
            true
        }

        Action::SubmitDidError(message) => {
            if let Err(err) = state.form.finish_submit(Err(SubmitError::new(message))) {
                state.status = Some(Status::Failure(err.to_string()));
            }
            true
        }

        Action::ResetField => match state.focus.field_name() {
            Some(name) => state.form.reset_field(name),
            None => false,
        },

        Action::ResetForm => {
            let status_cleared = state.status.take().is_some();
            state.form.reset_form() || status_cleared
        }

        Action::ThemeToggle => {
            state.theme = state.theme.toggle();
            true
        }

        Action::Quit => false, // handled in the main loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CURRENT, NEW, VERIFY};
    use crate::state::Focus;
    use crate::theme::Theme;

    fn harness() -> (AppState, mpsc::UnboundedSender<Action>) {
        let (tx, _rx) = mpsc::unbounded_channel();
        (AppState::new(Theme::Dark), tx)
    }

    fn input(field: &'static str, value: &str) -> Action {
        Action::Input {
            field,
            value: value.into(),
        }
    }

    fn fill_valid(state: &mut AppState, tx: &mpsc::UnboundedSender<Action>) {
        reduce(state, input(CURRENT, api::STORED_PASSPHRASE), tx);
        reduce(state, input(NEW, "123456"), tx);
        reduce(state, input(VERIFY, "123456"), tx);
    }

    #[test]
    fn test_input_reaches_the_form() {
        let (mut state, tx) = harness();

        let changed = reduce(&mut state, input(CURRENT, "hunter2"), &tx);

        assert!(changed);
        assert_eq!(state.form.value(CURRENT), Some("hunter2"));
    }

    #[test]
    fn test_focus_actions() {
        let (mut state, tx) = harness();

        reduce(&mut state, Action::FocusNext, &tx);
        assert_eq!(state.focus, Focus::New);

        reduce(&mut state, Action::FocusPrev, &tx);
        assert_eq!(state.focus, Focus::Current);
    }

    #[test]
    fn test_theme_toggle() {
        let (mut state, tx) = harness();

        reduce(&mut state, Action::ThemeToggle, &tx);
        assert_eq!(state.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_submit_on_invalid_form_is_ignored() {
        let (mut state, tx) = harness();

        let changed = reduce(&mut state, Action::SubmitPressed, &tx);

        assert!(!changed);
        assert!(!state.form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_marks_submitting_until_result_arrives() {
        let (mut state, tx) = harness();
        fill_valid(&mut state, &tx);

        assert!(reduce(&mut state, Action::SubmitPressed, &tx));
        assert!(state.form.is_submitting());

        reduce(&mut state, Action::SubmitDidComplete, &tx);
        assert!(!state.form.is_submitting());
        assert!(state.form.is_submitted());
        assert_eq!(
            state.status,
            Some(Status::Success("Password changed".into()))
        );
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_as_failure_status() {
        let (mut state, tx) = harness();
        fill_valid(&mut state, &tx);
        reduce(&mut state, Action::SubmitPressed, &tx);

        reduce(
            &mut state,
            Action::SubmitDidError("Current password is incorrect".into()),
            &tx,
        );

        assert!(!state.form.is_submitting());
        assert!(!state.form.is_submitted());
        assert_eq!(
            state.status,
            Some(Status::Failure("Current password is incorrect".into()))
        );
        // The form stays editable and resubmittable.
        assert!(!state.form.is_disabled());
    }

    #[test]
    fn test_reset_field_targets_the_focused_field() {
        let (mut state, tx) = harness();
        reduce(&mut state, input(CURRENT, "hunter2"), &tx);
        reduce(&mut state, input(NEW, "123456"), &tx);
        state.focus = Focus::New;

        assert!(reduce(&mut state, Action::ResetField, &tx));

        assert_eq!(state.form.value(NEW), Some(""));
        assert_eq!(state.form.value(CURRENT), Some("hunter2"));
    }

    #[test]
    fn test_reset_form_clears_everything() {
        let (mut state, tx) = harness();
        reduce(&mut state, input(CURRENT, "hunter2"), &tx);
        state.status = Some(Status::Failure("nope".into()));

        assert!(reduce(&mut state, Action::ResetForm, &tx));

        assert_eq!(state.form.value(CURRENT), Some(""));
        assert!(!state.form.is_touched());
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_input_clears_stale_status() {
        let (mut state, tx) = harness();
        state.status = Some(Status::Failure("nope".into()));

        reduce(&mut state, input(CURRENT, "h"), &tx);

        assert_eq!(state.status, None);
    }
}
