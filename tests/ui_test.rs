//! Rendering tests against ratatui's in-memory backend.

mod common;

use chrono::{TimeZone, Utc};
use ratatui::{Terminal, backend::TestBackend};
use rust_decimal_macros::dec;

use trendview::credentials::CredentialKey;
use trendview::range::RangeSelection;
use trendview::tui::{App, render};
use trendview::view::{ChartData, ViewOutcome, ViewQuery};

use common::bar;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn chart_of(rows: Vec<trendview::models::Bar>) -> ChartData {
    let range = RangeSelection::OneMonth;
    let window = range.window(Utc.with_ymd_and_hms(2024, 8, 31, 0, 0, 0).unwrap());
    ChartData::new("AAPL".into(), range, window, rows).unwrap()
}

fn chart() -> ChartData {
    chart_of(vec![
        bar("AAPL", 0, dec!(218.36), 62_501_000),
        bar("AAPL", 1, dec!(219.86), 105_568_560),
        bar("AAPL", 4, dec!(209.27), 119_548_589),
    ])
}

/// Counts (braille dots, half/full blocks) drawn anywhere on screen.
fn plotted_glyphs(text: &str) -> (usize, usize) {
    let braille = text
        .chars()
        .filter(|c| ('\u{2801}'..='\u{28FF}').contains(c))
        .count();
    let blocks = text.chars().filter(|c| matches!(c, '▀' | '▄' | '█')).count();
    (braille, blocks)
}

#[test]
fn test_chart_outcome_shows_table_and_both_charts() {
    let mut app = App::new(Vec::new());
    app.finish_loading(ViewOutcome::Chart(chart()));

    let text = screen(&app);

    assert!(text.contains("Stock Price Trend and Volume Viewer"));
    assert!(text.contains("AAPL Price Trend (1M)"));
    assert!(text.contains("AAPL Volume Data (1M)"));
    assert!(text.contains("218.36"));
    assert!(text.contains("Credentials set"));
}

#[test]
fn test_empty_outcome_shows_warning_without_charts() {
    let mut app = App::new(Vec::new());
    app.finish_loading(ViewOutcome::Empty {
        symbol: "ZZZZ".into(),
        range: RangeSelection::OneYear,
    });

    let text = screen(&app);

    assert!(text.contains("No historical data available for ZZZZ in the selected date range (1Y)."));
    assert!(!text.contains("Price Trend"));
    assert!(!text.contains("Volume Data"));
}

#[test]
fn test_error_outcome_shows_message_without_charts() {
    let mut app = App::new(vec![CredentialKey::ApiSecret]);
    app.finish_loading(ViewOutcome::Error(
        "An error occurred: market data API returned 403: forbidden.".into(),
    ));

    let text = screen(&app);

    assert!(text.contains("An error occurred: market data API returned 403: forbidden."));
    assert!(text.contains("Missing: API Secret"));
    assert!(!text.contains("Price Trend"));
}

#[test]
fn test_loading_frame_names_the_query() {
    let mut app = App::new(Vec::new());
    app.begin_loading(&ViewQuery::new("msft", RangeSelection::SixMonths));

    let text = screen(&app);

    assert!(text.contains("Fetching MSFT (6M)..."));
    assert!(text.contains("Loading MSFT (6M)..."));
}

#[test]
fn test_single_bar_is_plotted_in_both_charts() {
    let mut app = App::new(Vec::new());
    app.finish_loading(ViewOutcome::Chart(chart_of(vec![bar(
        "AAPL",
        0,
        dec!(218.36),
        62_501_000,
    )])));

    let (braille, blocks) = plotted_glyphs(&screen(&app));

    assert!(braille > 0, "price line not drawn");
    assert!(blocks > 0, "volume bar not drawn");
}
