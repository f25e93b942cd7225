//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::view::ViewOutcome;

use super::app::App;
use super::components::{controls, header, keybindings, status_bar};
use super::panels::{bars_table, notice, price_chart, volume_chart};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Symbol input + range selector
            Constraint::Length(1), // Status bar
            Constraint::Min(6),    // Result
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    header::render(frame, main_layout[0]);
    controls::render(frame, main_layout[1], app);
    status_bar::render(frame, main_layout[2], app);
    render_result(frame, main_layout[3], app);
    keybindings::render(frame, main_layout[4], app);
}

/// Renders whichever result the last interaction produced.
fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    match &app.outcome {
        None => notice::render_loading(frame, area, app.loading.as_ref()),
        Some(ViewOutcome::Error(message)) => notice::render_error(frame, area, message),
        Some(outcome @ ViewOutcome::Empty { .. }) => {
            let warning = outcome.warning().unwrap_or_default();
            notice::render_warning(frame, area, &warning);
        }
        Some(ViewOutcome::Chart(chart)) => {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(30), // Raw table
                    Constraint::Percentage(40), // Close price
                    Constraint::Percentage(30), // Volume
                ])
                .split(area);

            bars_table::render(frame, sections[0], app, chart);
            price_chart::render(frame, sections[1], chart);
            volume_chart::render(frame, sections[2], chart);
        }
    }
}
