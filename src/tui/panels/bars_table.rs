//! Raw bar table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::models::Bar;
use crate::tui::app::{App, Focus};
use crate::view::ChartData;

const HEADERS: [&str; 8] = [
    "timestamp",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "trade_count",
    "vwap",
];

/// Renders the raw rows starting at the app's scroll offset.
pub fn render(frame: &mut Frame, area: Rect, app: &App, chart: &ChartData) {
    let border_style = if app.focus == Focus::Table {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(
        " {} [{}-{} of {}] ",
        chart.symbol,
        (app.table_offset + 1).min(chart.rows.len()),
        (app.table_offset + area.height.saturating_sub(3) as usize).min(chart.rows.len()),
        chart.rows.len()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = chart
        .rows
        .iter()
        .skip(app.table_offset)
        .map(|bar| Row::new(cells(bar)))
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Formats one bar as table cells in [`HEADERS`] order.
pub fn cells(bar: &Bar) -> [String; 8] {
    [
        bar.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        format!("{:.2}", bar.open),
        format!("{:.2}", bar.high),
        format!("{:.2}", bar.low),
        format!("{:.2}", bar.close),
        bar.volume.to_string(),
        bar.trade_count.map(|n| n.to_string()).unwrap_or_default(),
        bar.vwap.map(|v| format!("{v:.2}")).unwrap_or_default(),
    ]
}
