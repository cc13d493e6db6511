//! Component trait for pure form widgets

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A pure UI widget that renders from props and emits actions.
///
/// Widgets follow these rules:
/// 1. Props contain ALL read-only data needed for rendering — form values
///    and errors come from the engine's state, never from the widget
/// 2. `handle_key` returns actions, never mutates external state
/// 3. `render` is a pure function of props (plus internal UI state like a
///    cursor position)
///
/// Internal UI state (cursor position) can live in `&mut self`, but data
/// mutations must go through actions the host feeds to its form engine.
///
/// Focus is passed through `Props`; unfocused widgets ignore keys.
pub trait Component<A> {
    /// Data required to render the widget (read-only)
    type Props<'a>;

    /// Handle a key press and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only widgets).
    #[allow(unused_variables)]
    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the widget to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
