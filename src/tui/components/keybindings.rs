//! Keybindings help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode};

/// Renders the keybindings help line for the current mode.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[Enter]load [Esc]cancel [←/→]move cursor",
        Mode::Normal => {
            "[i]symbol [h/l]range [1-5]pick range [j/k]scroll table [r]reload [Tab]focus [q]quit"
        }
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
