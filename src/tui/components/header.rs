//! Title line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Application title.
pub const TITLE: &str = "Stock Price Trend and Volume Viewer";

/// Renders the title line.
pub fn render(frame: &mut Frame, area: Rect) {
    let para = Paragraph::new(format!(" {TITLE} ")).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(para, area);
}
