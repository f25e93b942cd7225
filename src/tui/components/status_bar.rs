//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;
use crate::view::ViewOutcome;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let activity = match (&app.loading, &app.outcome) {
        (Some(query), _) => Span::styled(
            format!(" Loading {} ({})... ", query.symbol(), query.range),
            Style::default().fg(Color::Yellow),
        ),
        (None, Some(ViewOutcome::Chart(chart))) => Span::styled(
            format!(
                " {} → {} · {} bars ",
                chart.window.start.format("%Y-%m-%d"),
                chart.window.end.format("%Y-%m-%d"),
                chart.rows.len()
            ),
            Style::default().fg(Color::Green),
        ),
        (None, Some(ViewOutcome::Empty { .. })) => {
            Span::styled(" No data ", Style::default().fg(Color::Yellow))
        }
        (None, Some(ViewOutcome::Error(_))) => {
            Span::styled(" Failed ", Style::default().fg(Color::Red))
        }
        (None, None) => Span::styled(" Idle ", Style::default().fg(Color::DarkGray)),
    };

    let credentials = if app.missing_credentials.is_empty() {
        Span::styled(" Credentials set ", Style::default().fg(Color::Green))
    } else {
        let labels: Vec<&str> = app.missing_credentials.iter().map(|k| k.label()).collect();
        Span::styled(
            format!(" Missing: {} ", labels.join(", ")),
            Style::default().fg(Color::Yellow),
        )
    };

    let line = Line::from(vec![activity, Span::raw("│"), credentials]);
    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
