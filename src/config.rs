//! Application configuration loaded from environment variables.
//!
//! Credentials are read from:
//! - `API_KEY`: market data API key
//! - `API_SECRET`: market data API secret
//!
//! Missing credentials never fail configuration; the provider rejects the
//! request instead. Optional overrides:
//! - `MARKET_DATA_URL`: base URL of the data API
//! - `MARKET_DATA_FEED`: `iex`, `sip` or `otc`
//! - `MARKET_DATA_ADJUSTMENT`: `raw`, `split`, `dividend` or `all`
//! - `MARKET_DATA_SEND_END`: `true` (default) or `false`
//! - `TRENDVIEW_LOG`: path of a file receiving log output

use std::path::PathBuf;

use crate::credentials::Credentials;
use crate::market_data::alpaca::params::{Adjustment, Feed};

/// Default market data endpoint.
const DEFAULT_MARKET_DATA_URL: &str = "https://data.alpaca.markets";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub market_data: MarketDataConfig,
    /// Log destination. Logging is discarded when unset.
    pub log_file: Option<PathBuf>,
}

/// Market data client configuration values.
#[derive(Clone, Debug)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub feed: Option<Feed>,
    pub adjustment: Option<Adjustment>,
    /// Whether the upper bound of the date window is sent to the provider.
    pub send_end: bool,
    pub credentials: Credentials,
}

impl MarketDataConfig {
    /// Configuration pointing at `base_url` with provider defaults.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            feed: None,
            adjustment: None,
            send_end: true,
            credentials,
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TrendviewError::Config`](crate::TrendviewError::Config) if an
/// optional override is set to a value that cannot be interpreted.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("MARKET_DATA_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_MARKET_DATA_URL.to_string());

    let feed = non_empty_var("MARKET_DATA_FEED")
        .map(|v| v.parse::<Feed>())
        .transpose()?;
    let adjustment = non_empty_var("MARKET_DATA_ADJUSTMENT")
        .map(|v| v.parse::<Adjustment>())
        .transpose()?;
    let send_end = match non_empty_var("MARKET_DATA_SEND_END") {
        Some(v) => parse_bool("MARKET_DATA_SEND_END", &v)?,
        None => true,
    };

    Ok(AppConfig {
        market_data: MarketDataConfig {
            base_url,
            feed,
            adjustment,
            send_end,
            credentials: Credentials::from_env(),
        },
        log_file: log_file(),
    })
}

/// Path named by `TRENDVIEW_LOG`, if any.
///
/// Read on its own so logging can start before the rest of the
/// configuration is loaded.
pub fn log_file() -> Option<PathBuf> {
    non_empty_var("TRENDVIEW_LOG").map(PathBuf::from)
}

/// Returns the value of an environment variable if it exists and is non-empty.
pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_bool(name: &str, value: &str) -> crate::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::TrendviewError::Config(format!(
            "{name} must be true or false, got {value:?}"
        ))),
    }
}
