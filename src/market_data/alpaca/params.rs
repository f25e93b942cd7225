//! Query parameters for the historical bars endpoint.

use std::str::FromStr;

use chrono::SecondsFormat;

use crate::TrendviewError;
use crate::market_data::BarsRequest;

/// Maximum number of bars the endpoint returns per page.
pub const PAGE_LIMIT: u32 = 10_000;

/// Specifies the corporate action adjustment for stock data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Adjustment {
    #[default]
    Raw,
    Split,
    Dividend,
    All,
}

impl Adjustment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Split => "split",
            Self::Dividend => "dividend",
            Self::All => "all",
        }
    }
}

impl FromStr for Adjustment {
    type Err = TrendviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "split" => Ok(Self::Split),
            "dividend" => Ok(Self::Dividend),
            "all" => Ok(Self::All),
            _ => Err(TrendviewError::Config(format!("unknown adjustment {s:?}"))),
        }
    }
}

/// Specifies the source feed for stock data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Feed {
    #[default]
    Sip,
    Iex,
    Otc,
}

impl Feed {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sip => "sip",
            Self::Iex => "iex",
            Self::Otc => "otc",
        }
    }
}

impl FromStr for Feed {
    type Err = TrendviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sip" => Ok(Self::Sip),
            "iex" => Ok(Self::Iex),
            "otc" => Ok(Self::Otc),
            _ => Err(TrendviewError::Config(format!("unknown feed {s:?}"))),
        }
    }
}

/// Provider options that are not part of a [`BarsRequest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlpacaBarsParams {
    pub feed: Option<Feed>,
    pub adjustment: Option<Adjustment>,
}

/// Builds the query string pairs for one page of `request`.
pub fn construct_params(
    request: &BarsRequest,
    options: &AlpacaBarsParams,
    page_token: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("symbols", request.symbols.join(",")),
        ("timeframe", request.timeframe.to_string()),
        ("start", rfc3339(request.start)),
    ];
    if let Some(end) = request.end {
        query.push(("end", rfc3339(end)));
    }
    query.push(("limit", PAGE_LIMIT.to_string()));
    query.push(("sort", "asc".to_string()));
    if let Some(feed) = options.feed {
        query.push(("feed", feed.as_str().to_string()));
    }
    if let Some(adjustment) = options.adjustment {
        query.push(("adjustment", adjustment.as_str().to_string()));
    }
    if let Some(token) = page_token {
        query.push(("page_token", token.to_string()));
    }
    query
}

fn rfc3339(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
