//! Test utilities for widget tests
//!
//! Key-event constructors and a `TestBackend` render harness so widget
//! tests can assert on what actually reaches the terminal buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

/// Create a `KeyEvent` for a key code with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Create a `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Render the buffer's symbols as plain text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
    }
    out
}

/// Render harness over ratatui's `TestBackend`.
///
/// ```
/// use ratatui::widgets::Paragraph;
/// use tui_form_components::testing::RenderHarness;
///
/// let mut harness = RenderHarness::new(10, 1);
/// let output = harness.render_to_string(|frame| {
///     frame.render_widget(Paragraph::new("hello"), frame.area());
/// });
/// assert!(output.contains("hello"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend terminal");
        Self { terminal }
    }

    /// Run one draw pass and return the buffer as plain text.
    pub fn render_to_string<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(|frame| render(frame)).expect("draw");
        buffer_to_string(self.terminal.backend().buffer())
    }
}
