//! Closing price line chart.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use super::{padded_bounds, time_axis_labels};
use crate::view::ChartData;

/// Renders the close price over time.
pub fn render(frame: &mut Frame, area: Rect, chart: &ChartData) {
    let dataset = Dataset::default()
        .name("close")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&chart.close_points);

    let (t0, t1) = chart.time_bounds();
    let (lo, hi) = chart.close_bounds();
    let y_bounds = padded_bounds(lo, hi);

    let widget = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {} ", chart.price_title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([t0, t1])
                .labels(time_axis_labels(t0, t1)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels([
                    format!("{:.2}", y_bounds[0]),
                    format!("{:.2}", (y_bounds[0] + y_bounds[1]) / 2.0),
                    format!("{:.2}", y_bounds[1]),
                ]),
        );

    frame.render_widget(widget, area);
}
