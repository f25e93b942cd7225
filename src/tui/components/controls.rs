//! Symbol input and range selector.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::range::RangeSelection;
use crate::tui::app::{App, Focus, Mode};

/// Renders the control row.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_symbol_input(frame, columns[0], app);
    render_range_selector(frame, columns[1], app);
}

fn border_style(focused: bool, editing: bool) -> Style {
    if editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_symbol_input(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::Insert;
    let block = Block::default()
        .title(" Enter the stock symbol ")
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::SymbolInput, editing));

    let inner = block.inner(area);
    let para = Paragraph::new(app.symbol_input.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(block);
    frame.render_widget(para, area);

    if editing {
        let x = inner.x + app.symbol_input.cursor_column().min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_range_selector(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Select the time range for the trendline ")
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::RangeSelector, false));

    let mut spans: Vec<Span> = Vec::with_capacity(RangeSelection::ALL.len() * 2);
    for range in RangeSelection::ALL {
        let style = if range == app.range {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", range.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
