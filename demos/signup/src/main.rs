//! Signup - Minimal tui-form example
//!
//! This example demonstrates the core pattern without the component
//! library:
//! - Schema: what the form knows
//! - Form: where field state lives
//! - Key handling: edits become ChangeEvents, Enter advances or submits
//! - Main loop: Event -> Form -> Render
//!
//! Keys: type to edit, backspace to delete, tab/enter = next field,
//! shift+tab = previous field, enter on the button = submit, esc = quit

use std::io;
use std::time::Duration;

use crossterm::{
    event::{Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_form::prelude::*;

// ============================================================================
// Schema - What the form knows
// ============================================================================

const FIELDS: [(&str, &str); 3] = [
    ("username", "Username"),
    ("email", "Email"),
    ("display_name", "Display name"),
];

fn signup_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldDef::new("username").required().validator(|value, _| {
            if value.chars().count() < 3 {
                "Username must be at least 3 characters long".into()
            } else {
                String::new()
            }
        }))
        .field(FieldDef::new("email").required().validator(|value, _| {
            let looks_valid = value.contains('@') && value.rsplit('@').next().is_some_and(|d| d.contains('.'));
            if looks_valid {
                String::new()
            } else {
                "Please enter a valid email address".into()
            }
        }))
        .field(FieldDef::new("display_name").required().validator(|value, _| {
            if value.chars().count() < 2 {
                "Display name must be at least 2 characters long".into()
            } else {
                String::new()
            }
        }))
}

/// Simulated account creation.
async fn create_account(_values: FieldValues) -> SubmitResult {
    tokio::time::sleep(Duration::from_millis(300)).await;
    Ok(())
}

// ============================================================================
// Main - Setup terminal, run event loop, cleanup
// ============================================================================

#[tokio::main]
async fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut form = Form::new(signup_schema());

    // Focus index: 0..FIELDS.len() are fields, FIELDS.len() is the button
    let mut focus: usize = 0;
    let button = FIELDS.len();

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TermEvent>();
    let cancel_token = CancellationToken::new();
    let _poller = tokio::task::spawn_blocking({
        let cancel = cancel_token.clone();
        move || {
            while !cancel.is_cancelled() {
                if crossterm::event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    match crossterm::event::read() {
                        Ok(event) => {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
        }
    });

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| render(frame, &form, focus))?;
            should_render = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };

        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if ctrl => break,
                    KeyCode::Tab | KeyCode::Down => {
                        focus = (focus + 1) % (button + 1);
                        should_render = true;
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        focus = (focus + button) % (button + 1);
                        should_render = true;
                    }
                    KeyCode::Enter if focus < button => {
                        focus += 1;
                        should_render = true;
                    }
                    KeyCode::Enter => {
                        if !form.is_disabled() {
                            // Inline submit: the loop pauses for the
                            // simulated round-trip.
                            let _ = form.handle_submit(SubmitEvent::new(), create_account).await;
                            should_render = true;
                        }
                    }
                    code if focus < button && !ctrl => {
                        let (name, _) = FIELDS[focus];
                        if let Some(value) = edited_value(&form, name, code) {
                            should_render = form.handle_change(ChangeEvent::new(name, value));
                        }
                    }
                    _ => {}
                }
            }
            TermEvent::Resize(_, _) => {
                should_render = true;
            }
            _ => {}
        }
    }

    cancel_token.cancel();
    Ok(())
}

/// Apply a key to a field's current value, if it is an edit key.
fn edited_value(form: &Form, field: &str, code: KeyCode) -> Option<String> {
    let current = form.value(field).unwrap_or("");
    match code {
        KeyCode::Char(c) => {
            let mut value = current.to_string();
            value.push(c);
            Some(value)
        }
        KeyCode::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            Some(value)
        }
        _ => None,
    }
}

// ============================================================================
// Render - fields, button, help
// ============================================================================

fn render(frame: &mut Frame, form: &Form, focus: usize) {
    let area = frame.area();

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(44),
        Constraint::Fill(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    let [title_area, _, f0, f1, f2, button_area, _, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(column);

    let title = Paragraph::new("Sign Up")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, title_area);

    for (i, field_area) in [f0, f1, f2].into_iter().enumerate() {
        let (name, label) = FIELDS[i];
        render_field(frame, field_area, form, name, label, focus == i);
    }

    render_button(frame, button_area, form, focus == FIELDS.len());

    let help = Paragraph::new("tab/enter: next  shift+tab: prev  esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &Form,
    name: &str,
    label: &str,
    is_focused: bool,
) {
    let value = form.value(name).unwrap_or("");
    let error = form.error(name);
    let has_error = error.map(|e| e.has_error).unwrap_or(false);

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input_area = Rect {
        height: 3,
        ..area
    };
    let input = Paragraph::new(value).block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, input_area);

    if has_error {
        let message = error.map(|e| e.message.as_str()).unwrap_or("");
        let error_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }

    if is_focused {
        let cursor_x = input_area.x + 1 + value.chars().count() as u16;
        if cursor_x < input_area.x + input_area.width.saturating_sub(1) {
            frame.set_cursor_position((cursor_x, input_area.y + 1));
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, form: &Form, is_focused: bool) {
    let text = if form.is_submitted() {
        "\u{2713} Account created"
    } else {
        "Create account"
    };

    let mut style = if form.is_disabled() {
        Style::default().fg(Color::DarkGray)
    } else if form.is_submitted() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    if is_focused && !form.is_disabled() {
        style = style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
    frame.render_widget(button, area);
}
