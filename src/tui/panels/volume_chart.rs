//! Volume bar chart.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use super::time_axis_labels;
use crate::view::ChartData;

/// Renders one vertical bar per day, scaled to the largest volume.
pub fn render(frame: &mut Frame, area: Rect, chart: &ChartData) {
    let dataset = Dataset::default()
        .name("volume")
        .marker(symbols::Marker::HalfBlock)
        .graph_type(GraphType::Bar)
        .style(Style::default().fg(Color::Blue))
        .data(&chart.volume_points);

    let (t0, t1) = chart.time_bounds();
    let max = chart.max_volume().max(1);
    let top = max as f64 * 1.05;

    let widget = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {} ", chart.volume_title()))
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
                .bounds([0.0, top])
                .labels(["0".to_string(), compact(max / 2), compact(max)]),
        );

    frame.render_widget(widget, area);
}

/// Short human-readable volume, e.g. `62.5M`.
pub fn compact(volume: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];
    for (scale, suffix) in UNITS {
        if volume >= scale {
            return format!("{:.1}{suffix}", volume as f64 / scale as f64);
        }
    }
    volume.to_string()
}
