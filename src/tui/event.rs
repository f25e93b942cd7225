//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::range::RangeSelection;
use crate::view::ViewQuery;

use super::app::{App, Focus, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Actions that require external handling.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Run the fetch pipeline for a query.
    Load(ViewQuery),
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(Event::Key(key)) => handle_key(app, key),
        Message::Input(Event::Resize(_, _)) => None,
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global keys (work in any mode)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('q') if key.modifiers.is_empty() && app.mode == Mode::Normal => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return None;
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.next_focus();
            None
        }

        // Edit the symbol
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.focus = Focus::SymbolInput;
            app.mode = Mode::Insert;
            None
        }
        KeyCode::Enter if app.focus == Focus::SymbolInput => {
            app.mode = Mode::Insert;
            None
        }

        // Range selection
        KeyCode::Char('h') | KeyCode::Left => change_range(app, app.range.previous()),
        KeyCode::Char('l') | KeyCode::Right => change_range(app, app.range.next()),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            change_range(app, RangeSelection::ALL[index])
        }

        // Table scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            None
        }

        KeyCode::Char('r') => Some(Action::Load(app.query())),

        _ => None,
    }
}

/// Selects `range` and requests a reload if it changed.
fn change_range(app: &mut App, range: RangeSelection) -> Option<Action> {
    app.focus = Focus::RangeSelector;
    app.select_range(range).then(|| Action::Load(app.query()))
}

/// Handles keys in insert mode (symbol editing).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    let input = &mut app.symbol_input;
    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            Some(Action::Load(app.query()))
        }
        KeyCode::Char(c)
            if !c.is_whitespace() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            input.insert(c);
            None
        }
        KeyCode::Backspace => {
            input.backspace();
            None
        }
        KeyCode::Delete => {
            input.delete();
            None
        }
        KeyCode::Left => {
            input.move_left();
            None
        }
        KeyCode::Right => {
            input.move_right();
            None
        }
        KeyCode::Home => {
            input.move_home();
            None
        }
        KeyCode::End => {
            input.move_end();
            None
        }
        _ => None,
    }
}
