//! The fetch → normalize → chart pipeline behind every interaction.
//!
//! [`load_view`] is the single failure boundary: whatever goes wrong while
//! fetching or preparing the data comes back as [`ViewOutcome::Error`] and
//! nothing partial is handed to the renderer.

use chrono::{DateTime, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use tracing::{info, warn};

use crate::market_data::{BarsRequest, BarsSource};
use crate::models::Bar;
use crate::range::{DateWindow, RangeSelection};
use crate::{Result, TrendviewError};

/// Default symbol shown at startup.
pub const DEFAULT_SYMBOL: &str = "AAPL";

const HALF_DAY_SECS: f64 = 12.0 * 60.0 * 60.0;

/// What the user asked to see.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewQuery {
    symbol: String,
    pub range: RangeSelection,
}

impl ViewQuery {
    /// Builds a query, trimming and uppercasing `symbol`.
    pub fn new(symbol: &str, range: RangeSelection) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            range,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, RangeSelection::default())
    }
}

/// Result of one interaction, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewOutcome {
    /// Data was found.
    Chart(ChartData),
    /// The provider answered but had no bars in the window.
    Empty { symbol: String, range: RangeSelection },
    /// Something failed; the message is shown as-is.
    Error(String),
}

impl ViewOutcome {
    /// Wraps `err` in the one-line message shown to the user.
    pub fn from_error(err: &TrendviewError) -> Self {
        ViewOutcome::Error(format!("An error occurred: {err}"))
    }

    /// Warning text for an empty result, `None` for other outcomes.
    pub fn warning(&self) -> Option<String> {
        match self {
            ViewOutcome::Empty { symbol, range } => Some(format!(
                "No historical data available for {symbol} in the selected date range ({range})."
            )),
            _ => None,
        }
    }
}

/// Everything the table and both charts need.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub symbol: String,
    pub range: RangeSelection,
    pub window: DateWindow,
    /// Bars in ascending timestamp order.
    pub rows: Vec<Bar>,
    /// `(unix seconds, close)` points for the price line.
    pub close_points: Vec<(f64, f64)>,
    /// `(unix seconds, volume)` points for the volume bars.
    pub volume_points: Vec<(f64, f64)>,
}

impl ChartData {
    /// Prepares chart series from timestamp-ordered rows.
    ///
    /// # Errors
    ///
    /// Returns [`TrendviewError::MalformedResponse`] if a close price
    /// cannot be represented as a float.
    pub fn new(
        symbol: String,
        range: RangeSelection,
        window: DateWindow,
        rows: Vec<Bar>,
    ) -> Result<Self> {
        let close_points = rows
            .iter()
            .map(|bar| {
                let close = bar.close.to_f64().ok_or_else(|| {
                    TrendviewError::MalformedResponse(format!(
                        "close {} at {} is not representable",
                        bar.close, bar.timestamp
                    ))
                })?;
                Ok((bar.timestamp.timestamp() as f64, close))
            })
            .collect::<Result<Vec<_>>>()?;

        let volume_points = rows
            .iter()
            .map(|bar| (bar.timestamp.timestamp() as f64, bar.volume as f64))
            .collect();

        Ok(Self {
            symbol,
            range,
            window,
            rows,
            close_points,
            volume_points,
        })
    }

    /// Title of the price line chart.
    pub fn price_title(&self) -> String {
        format!("{} Price Trend ({})", self.symbol, self.range)
    }

    /// Title of the volume bar chart.
    pub fn volume_title(&self) -> String {
        format!("{} Volume Data ({})", self.symbol, self.range)
    }

    /// Lowest and highest close, for the price axis.
    pub fn close_bounds(&self) -> (f64, f64) {
        self.close_points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, c)| {
                (lo.min(*c), hi.max(*c))
            })
    }

    /// Largest volume in the window, for the volume axis.
    pub fn max_volume(&self) -> u64 {
        self.rows.iter().map(|bar| bar.volume).max().unwrap_or(0)
    }

    /// Earliest and latest bar timestamp, for the time axis.
    ///
    /// A single bar is centred in a one-day span so the charts have a
    /// non-empty range to draw in.
    pub fn time_bounds(&self) -> (f64, f64) {
        match (self.close_points.first(), self.close_points.last()) {
            (Some((first, _)), Some((last, _))) if first < last => (*first, *last),
            (Some((only, _)), _) => (only - HALF_DAY_SECS, only + HALF_DAY_SECS),
            _ => (0.0, 0.0),
        }
    }
}

/// Runs one interaction end to end.
///
/// `now` fixes the date window. When `send_end` is set the window's end is
/// transmitted; otherwise the provider returns everything after `start`.
pub async fn load_view<Tz: TimeZone>(
    source: &dyn BarsSource,
    query: &ViewQuery,
    now: DateTime<Tz>,
    send_end: bool,
) -> ViewOutcome {
    match try_load_view(source, query, now, send_end).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(symbol = query.symbol(), range = %query.range, error = %err, "view failed");
            ViewOutcome::from_error(&err)
        }
    }
}

async fn try_load_view<Tz: TimeZone>(
    source: &dyn BarsSource,
    query: &ViewQuery,
    now: DateTime<Tz>,
    send_end: bool,
) -> Result<ViewOutcome> {
    if query.symbol().is_empty() {
        return Err(TrendviewError::Config("stock symbol is empty".into()));
    }

    let window = query.range.window(now);
    let request = BarsRequest::daily(query.symbol(), window.start)
        .with_end(send_end.then_some(window.end));

    let rows = source.fetch_bars(&request).await?.into_rows();
    if rows.is_empty() {
        info!(symbol = query.symbol(), range = %query.range, "no bars in window");
        return Ok(ViewOutcome::Empty {
            symbol: query.symbol().to_string(),
            range: query.range,
        });
    }

    let chart = ChartData::new(query.symbol().to_string(), query.range, window, rows)?;
    info!(
        symbol = query.symbol(),
        range = %query.range,
        rows = chart.rows.len(),
        "view ready"
    );
    Ok(ViewOutcome::Chart(chart))
}
