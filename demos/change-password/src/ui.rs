//! UI composition: three passphrase fields, the submit button, and chrome

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tui_form_components::{
    Component, SubmitButton, SubmitButtonProps, TextField, TextFieldProps,
};

use crate::action::Action;
use crate::api;
use crate::schema::{CURRENT, NEW, VERIFY};
use crate::state::{AppState, Focus, Status};

pub struct Ui {
    current: TextField,
    new: TextField,
    verify: TextField,
    button: SubmitButton,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            current: TextField::new(),
            new: TextField::new(),
            verify: TextField::new(),
            button: SubmitButton::new(),
        }
    }

    /// Route a key press to the focused widget.
    pub fn handle_key(&mut self, key: &KeyEvent, state: &AppState) -> Option<Action> {
        match state.focus {
            Focus::Current => self
                .current
                .handle_key(key, field_props(state, CURRENT, "Current password", true))
                .into_iter()
                .next(),
            Focus::New => self
                .new
                .handle_key(key, field_props(state, NEW, "New password", true))
                .into_iter()
                .next(),
            Focus::Verify => self
                .verify
                .handle_key(key, field_props(state, VERIFY, "Verify password", true))
                .into_iter()
                .next(),
            Focus::Button => self
                .button
                .handle_key(key, button_props(state, true))
                .into_iter()
                .next(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(46),
            Constraint::Fill(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [title_area, _, current_area, new_area, verify_area, button_area, status_area, _, help_area] =
            Layout::vertical([
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(4), // field + error line
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3), // button
                Constraint::Length(1), // status
                Constraint::Fill(1),
                Constraint::Length(1), // help
            ])
            .areas(column);

        let title = Paragraph::new("Change Password")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(state.theme.accent())
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, title_area);

        self.current.render(
            frame,
            current_area,
            field_props(state, CURRENT, "Current password", state.focus == Focus::Current),
        );
        self.new.render(
            frame,
            new_area,
            field_props(state, NEW, "New password", state.focus == Focus::New),
        );
        self.verify.render(
            frame,
            verify_area,
            field_props(state, VERIFY, "Verify password", state.focus == Focus::Verify),
        );
        self.button.render(
            frame,
            button_area,
            button_props(state, state.focus == Focus::Button),
        );

        if let Some(status) = &state.status {
            let (text, color) = match status {
                Status::Success(message) => (message.as_str(), state.theme.success()),
                Status::Failure(message) => (message.as_str(), state.theme.failure()),
            };
            let status_line = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color));
            frame.render_widget(status_line, status_area);
        }

        let help = Paragraph::new(format!(
            "tab: next  ctrl+t: theme  ctrl+r: reset  ctrl+x: clear field  esc: quit  (stored password: {})",
            api::STORED_PASSPHRASE
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(state.theme.dim()));
        frame.render_widget(help, help_area);
    }
}

fn field_props<'a>(
    state: &'a AppState,
    field: &'static str,
    label: &'static str,
    is_focused: bool,
) -> TextFieldProps<'a, Action> {
    let on_change: fn(String) -> Action = match field {
        CURRENT => |value| Action::Input {
            field: CURRENT,
            value,
        },
        NEW => |value| Action::Input { field: NEW, value },
        _ => |value| Action::Input {
            field: VERIFY,
            value,
        },
    };

    TextFieldProps {
        label,
        value: state.form.value(field).unwrap_or(""),
        placeholder: "",
        error: state.form.error(field),
        is_focused,
        mask: true,
        on_change,
        on_submit: || Action::FocusNext,
    }
}

fn button_props(state: &AppState, is_focused: bool) -> SubmitButtonProps<'_, Action> {
    SubmitButtonProps {
        label: "Change password",
        is_focused,
        is_disabled: state.form.is_disabled(),
        is_submitting: state.form.is_submitting(),
        is_submitted: state.form.is_submitted(),
        on_press: || Action::SubmitPressed,
    }
}
