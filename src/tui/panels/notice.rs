//! Single-message panels shown instead of charts.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::view::ViewQuery;

fn render_message(frame: &mut Frame, area: Rect, text: String, color: Color) {
    let para = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(para, area);
}

/// Empty-result warning.
pub fn render_warning(frame: &mut Frame, area: Rect, warning: &str) {
    render_message(frame, area, format!("⚠ {warning}"), Color::Yellow);
}

/// One-line failure message.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    render_message(frame, area, message.to_string(), Color::Red);
}

/// Placeholder before the first result arrives.
pub fn render_loading(frame: &mut Frame, area: Rect, query: Option<&ViewQuery>) {
    let text = match query {
        Some(query) => format!("Fetching {} ({})...", query.symbol(), query.range),
        None => "Press [r] to load data".to_string(),
    };
    render_message(frame, area, text, Color::DarkGray);
}
