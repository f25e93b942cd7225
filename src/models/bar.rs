//! OHLCV bars and the tables that hold them.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// One OHLCV observation for one symbol at one timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub symbol: String,
    /// Start of the bar interval (UTC).
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
    /// Number of trades in the interval. Not all providers supply this.
    pub trade_count: Option<u64>,
    /// Volume-weighted average price. Not all providers supply this.
    pub vwap: Option<Decimal>,
}

/// A table of bars in one of the two shapes a provider can return.
#[derive(Debug, Clone, PartialEq)]
pub enum BarTable {
    /// Rows keyed by symbol, then timestamp. Returned whenever a
    /// collection of symbols was requested, even a single one.
    Composite(IndexMap<String, Vec<Bar>>),
    /// Rows indexed by timestamp alone, ascending.
    Flat(Vec<Bar>),
}

impl BarTable {
    /// Reshapes the table so it is indexed by timestamp alone.
    ///
    /// Composite tables are flattened and sorted by timestamp (stable, so
    /// rows sharing a timestamp keep their symbol order). Values are never
    /// altered or dropped. A flat table is returned unchanged.
    pub fn normalize(self) -> BarTable {
        BarTable::Flat(self.into_rows())
    }

    /// Normalizes and returns the rows.
    pub fn into_rows(self) -> Vec<Bar> {
        match self {
            BarTable::Flat(rows) => rows,
            BarTable::Composite(by_symbol) => {
                let mut rows: Vec<Bar> = by_symbol.into_values().flatten().collect();
                rows.sort_by_key(|bar| bar.timestamp);
                rows
            }
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, BarTable::Composite(_))
    }

    /// Total number of rows across all symbols.
    pub fn len(&self) -> usize {
        match self {
            BarTable::Flat(rows) => rows.len(),
            BarTable::Composite(by_symbol) => by_symbol.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BarTable {
    fn default() -> Self {
        BarTable::Flat(Vec::new())
    }
}
