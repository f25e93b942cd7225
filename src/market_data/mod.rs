//! Historical market data sources.
//!
//! [`BarsSource`] is the seam between the viewer and any provider of
//! historical bars. The only production implementation is
//! [`alpaca::AlpacaClient`]; tests substitute their own.

pub mod alpaca;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::Result;
use crate::models::{BarTable, TimeFrame};

/// Parameters of a historical bars query.
#[derive(Debug, Clone, PartialEq)]
pub struct BarsRequest {
    pub symbols: Vec<String>,
    pub timeframe: TimeFrame,
    pub start: DateTime<Utc>,
    /// Upper bound. When `None` the provider decides where the data ends.
    pub end: Option<DateTime<Utc>>,
}

impl BarsRequest {
    /// Daily bars for a single symbol from `start` onward.
    pub fn daily(symbol: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            symbols: vec![symbol.into()],
            timeframe: TimeFrame::day(),
            start,
            end: None,
        }
    }

    /// Sets the upper bound of the query.
    #[must_use]
    pub fn with_end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }
}

/// A provider of historical OHLCV bars.
#[async_trait]
pub trait BarsSource: Send + Sync {
    /// Fetches every bar matching `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`TrendviewError`](crate::TrendviewError) when the provider
    /// cannot be reached, rejects the request, or answers with a payload
    /// that cannot be read.
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<BarTable>;
}
