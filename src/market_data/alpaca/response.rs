//! Wire models for the historical bars endpoint.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Bar;

/// A single bar as sent by the provider.
#[derive(Deserialize, Debug, Clone)]
pub struct AlpacaBar {
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "o")]
    pub open: Decimal,
    #[serde(rename = "h")]
    pub high: Decimal,
    #[serde(rename = "l")]
    pub low: Decimal,
    #[serde(rename = "c")]
    pub close: Decimal,
    #[serde(rename = "v")]
    pub volume: u64,
    #[serde(rename = "n", default)]
    pub trade_count: Option<u64>,
    #[serde(rename = "vw", default)]
    pub vwap: Option<Decimal>,
}

impl AlpacaBar {
    /// Converts into the crate's bar model, attaching `symbol`.
    pub fn into_bar(self, symbol: &str) -> Bar {
        Bar {
            symbol: symbol.to_string(),
            timestamp: self.timestamp,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            trade_count: self.trade_count,
            vwap: self.vwap,
        }
    }
}

/// One page of a multi-symbol bars response.
///
/// `bars` is `null` or `{}` when nothing matched.
#[derive(Deserialize, Debug, Default)]
pub struct AlpacaResponse {
    #[serde(default)]
    pub bars: Option<IndexMap<String, Vec<AlpacaBar>>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Deserialize, Debug)]
pub struct AlpacaErrorBody {
    pub message: String,
}
