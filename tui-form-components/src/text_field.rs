//! Labeled single-line input bound to one form field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_form_core::FieldError;

use crate::component::Component;

/// Props for TextField
pub struct TextFieldProps<'a, A> {
    /// Field label, shown as the box title
    pub label: &'a str,
    /// Current field value (from the form engine)
    pub value: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// The field's validation outcome (from the form engine)
    pub error: Option<&'a FieldError>,
    /// Whether this widget has focus
    pub is_focused: bool,
    /// Render the value as bullets (passphrase entry)
    pub mask: bool,
    /// Callback when the value changes
    pub on_change: fn(String) -> A,
    /// Callback when the user presses Enter
    pub on_submit: fn() -> A,
}

/// A labeled single-line input with cursor and an error line.
///
/// Handles typing, backspace, delete, and cursor movement. Emits
/// `on_change` with the edited value for each mutation and `on_submit` for
/// Enter; the host feeds changes to its form engine and renders the
/// resulting error back through props.
#[derive(Default)]
pub struct TextField {
    /// Cursor position (byte index into the value)
    cursor: usize,
}

impl TextField {
    /// Create a new TextField
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp cursor to a valid position for the given value.
    ///
    /// The value lives in the form engine and can change underneath the
    /// widget (reset, external edit), so both event handling and rendering
    /// re-clamp first.
    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// Move cursor left by one character
    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().last() {
            self.cursor = i;
        }
    }

    /// Move cursor right by one character
    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Insert character at cursor position
    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Delete character before cursor (backspace)
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().last()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    /// Delete character at cursor (delete key)
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }

    /// Cursor column in characters (bullets and characters are one cell).
    fn cursor_column(&self, value: &str) -> u16 {
        value[..self.cursor].chars().count() as u16
    }
}

impl<A> Component<A> for TextField {
    type Props<'a> = TextFieldProps<'a, A>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        // Ctrl+key shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A: move to start
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                // Ctrl+E: move to end
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                // Ctrl+U: clear line
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self.delete_char_at(props.value).map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        self.clamp_cursor(props.value);

        let has_error = props.error.map(|e| e.has_error).unwrap_or(false);

        let border_style = if has_error {
            Style::default().fg(Color::Red)
        } else if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let masked;
        let display_text = if props.value.is_empty() {
            props.placeholder
        } else if props.mask {
            masked = "\u{2022}".repeat(props.value.chars().count());
            &masked
        } else {
            props.value
        };

        let text_style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let input_area = Rect {
            height: area.height.min(3),
            ..area
        };

        let paragraph = Paragraph::new(display_text).style(text_style).block(
            Block::default()
                .title(format!(" {} ", props.label))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(paragraph, input_area);

        // Error line under the box
        if has_error && area.height >= 4 {
            let message = props.error.map(|e| e.message.as_str()).unwrap_or("");
            let error_area = Rect {
                y: area.y + 3,
                height: 1,
                ..input_area
            };
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::Red)),
                error_area,
            );
        }

        // Show cursor if focused
        if props.is_focused && input_area.height >= 3 {
            let cursor_x = input_area.x + 1 + self.cursor_column(props.value);
            let cursor_y = input_area.y + 1;
            if cursor_x < input_area.x + input_area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, key, RenderHarness};
    use tui_form_core::REQUIRED_MESSAGE;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Submit,
    }

    fn props(value: &str, focused: bool) -> TextFieldProps<'_, TestAction> {
        TextFieldProps {
            label: "Username",
            value,
            placeholder: "",
            error: None,
            is_focused: focused,
            mask: false,
            on_change: TestAction::Change,
            on_submit: || TestAction::Submit,
        }
    }

    #[test]
    fn test_typing() {
        let mut field = TextField::new();

        let actions: Vec<_> = field
            .handle_key(&char_key('a'), props("", true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("a".into())]);
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut field = TextField::new();
        field.cursor = 5; // at end of "hello"

        let actions: Vec<_> = field
            .handle_key(&char_key('!'), props("hello", true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("hello!".into())]);
    }

    #[test]
    fn test_backspace() {
        let mut field = TextField::new();
        field.cursor = 5;

        let actions: Vec<_> = field
            .handle_key(&key(KeyCode::Backspace), props("hello", true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("hell".into())]);
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut field = TextField::new();

        let actions: Vec<_> = field
            .handle_key(&key(KeyCode::Backspace), props("hello", true))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn test_enter_submits() {
        let mut field = TextField::new();

        let actions: Vec<_> = field
            .handle_key(&key(KeyCode::Enter), props("hello", true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Submit]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut field = TextField::new();

        let actions: Vec<_> = field
            .handle_key(&char_key('a'), props("", false))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        // The engine reset the value out from under the widget.
        let mut field = TextField::new();
        field.cursor = 10;

        let actions: Vec<_> = field
            .handle_key(&char_key('x'), props("ab", true))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("abx".into())]);
    }

    #[test]
    fn test_render_value_and_label() {
        let mut harness = RenderHarness::new(30, 4);
        let mut field = TextField::new();

        let output = harness.render_to_string(|frame| {
            field.render(frame, frame.area(), props("hello", true));
        });

        assert!(output.contains("hello"));
        assert!(output.contains("Username"));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut harness = RenderHarness::new(30, 4);
        let mut field = TextField::new();

        let output = harness.render_to_string(|frame| {
            let p = TextFieldProps {
                placeholder: "Type here...",
                ..props("", true)
            };
            field.render(frame, frame.area(), p);
        });

        assert!(output.contains("Type here..."));
    }

    #[test]
    fn test_render_masks_value() {
        let mut harness = RenderHarness::new(30, 4);
        let mut field = TextField::new();

        let output = harness.render_to_string(|frame| {
            let p = TextFieldProps {
                mask: true,
                ..props("secret", true)
            };
            field.render(frame, frame.area(), p);
        });

        assert!(!output.contains("secret"));
        assert!(output.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    }

    #[test]
    fn test_render_error_line() {
        let mut harness = RenderHarness::new(40, 4);
        let mut field = TextField::new();
        let error = FieldError::required();

        let output = harness.render_to_string(|frame| {
            let p = TextFieldProps {
                error: Some(&error),
                ..props("", true)
            };
            field.render(frame, frame.area(), p);
        });

        assert!(output.contains(REQUIRED_MESSAGE));
    }
}
