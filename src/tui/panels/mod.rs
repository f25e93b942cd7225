//! Result panels: raw table, price line, volume bars and notices.

pub mod bars_table;
pub mod notice;
pub mod price_chart;
pub mod volume_chart;

use chrono::DateTime;

/// Formats unix seconds as a calendar date for axis labels.
pub(crate) fn date_label(unix_seconds: f64) -> String {
    DateTime::from_timestamp(unix_seconds as i64, 0)
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// First, middle and last date labels across `[start, end]`.
pub(crate) fn time_axis_labels(start: f64, end: f64) -> Vec<String> {
    if start == end {
        return vec![date_label(start)];
    }
    vec![
        date_label(start),
        date_label(start + (end - start) / 2.0),
        date_label(end),
    ]
}

/// Widens `[lo, hi]` by 5% on each side, or by one unit when flat.
pub(crate) fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    [lo - pad, hi + pad]
}
