//! Terminal user interface for the stock trend viewer.
//!
//! Provides a Ratatui-based TUI with a symbol input, a range selector, the
//! raw bar table and the price and volume charts.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod panels;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message, spawn_event_reader, update};
pub use terminal::{Tui, draw, restore_terminal, setup_terminal};
pub use ui::render;
