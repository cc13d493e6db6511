//! Change Password - tui-form demo
//!
//! Demonstrates the full form pattern:
//! 1. Key event -> focused widget -> Action
//! 2. Actions applied by the reducer, which drives the form engine
//! 3. Submit runs on a spawned task; its outcome comes back as a
//!    `SubmitDid*` action through the channel
//! 4. If state changed, re-render
//!
//! The fake backend stores the passphrase "hunter2" and rejects anything
//! else, so both the failure and success paths are reachable.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p change-password
//!
//! # Start in light mode
//! cargo run -p change-password -- --theme light
//! ```

mod action;
mod api;
mod reducer;
mod schema;
mod state;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::Ui;

/// Change Password - tui-form demo
#[derive(Parser, Debug)]
#[command(name = "change-password")]
#[command(about = "A password-change form demonstrating tui-form patterns")]
struct Args {
    /// Chrome color scheme
    #[arg(long, value_enum, default_value = "dark")]
    theme: Theme,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args.theme).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Poll crossterm events on a blocking thread, forwarding them to the loop.
fn spawn_event_poller(
    tx: mpsc::UnboundedSender<TermEvent>,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !cancel.is_cancelled() {
            if crossterm::event::poll(Duration::from_millis(50)).unwrap_or(false) {
                match crossterm::event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        }
    })
}

/// Map global keys; everything else goes to the focused widget.
fn map_global_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ThemeToggle),
            KeyCode::Char('r') => Some(Action::ResetForm),
            KeyCode::Char('x') => Some(Action::ResetField),
            _ => None,
        };
    }
    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Down => Some(Action::FocusNext),
        KeyCode::Up => Some(Action::FocusPrev),
        _ => None,
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: Theme,
) -> io::Result<()> {
    // Action channel: widgets and the spawned backend task both feed it
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut state = AppState::new(theme);
    let mut ui = Ui::new();

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TermEvent>();
    let cancel_token = CancellationToken::new();
    let _poller = spawn_event_poller(event_tx, cancel_token.clone());

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, &state))?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                match event {
                    TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = map_global_key(key.code, key.modifiers)
                            .or_else(|| ui.handle_key(&key, &state));
                        if let Some(action) = action {
                            let _ = action_tx.send(action);
                        }
                    }
                    TermEvent::Resize(_, _) => {
                        should_render = true;
                    }
                    _ => {}
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                should_render = reduce(&mut state, action, &action_tx);
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}
