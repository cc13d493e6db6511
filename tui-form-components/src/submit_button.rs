//! Submit button driven by the form engine's lifecycle flags

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::component::Component;

/// Props for SubmitButton
pub struct SubmitButtonProps<'a, A> {
    /// Button label in the idle state
    pub label: &'a str,
    /// Whether this widget has focus
    pub is_focused: bool,
    /// Submit gate from the form engine (`form.is_disabled()`)
    pub is_disabled: bool,
    /// True while a submit is in flight (`form.is_submitting()`)
    pub is_submitting: bool,
    /// True after a successful submit (`form.is_submitted()`)
    pub is_submitted: bool,
    /// Callback when the button is pressed
    pub on_press: fn() -> A,
}

/// A one-line button that renders the submit lifecycle.
///
/// Enter emits `on_press` unless the form is disabled or already
/// submitting; the render states mirror the engine's flags (dimmed while
/// disabled, ellipsis while submitting, check mark once submitted).
#[derive(Default)]
pub struct SubmitButton;

impl SubmitButton {
    /// Create a new SubmitButton
    pub fn new() -> Self {
        Self
    }
}

impl<A> Component<A> for SubmitButton {
    type Props<'a> = SubmitButtonProps<'a, A>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.is_disabled || props.is_submitting {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some((props.on_press)()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let text = if props.is_submitting {
            format!("{}\u{2026}", props.label)
        } else if props.is_submitted {
            format!("\u{2713} {}", props.label)
        } else {
            props.label.to_string()
        };

        let mut style = if props.is_disabled || props.is_submitting {
            Style::default().fg(Color::DarkGray)
        } else if props.is_submitted {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if props.is_focused && !props.is_disabled {
            style = style.add_modifier(Modifier::BOLD);
        }

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(button, area);
    }
}
