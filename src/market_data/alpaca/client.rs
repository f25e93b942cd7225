//! HTTP client for the historical bars endpoint.

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::params::{AlpacaBarsParams, construct_params};
use super::response::{AlpacaErrorBody, AlpacaResponse};
use crate::config::MarketDataConfig;
use crate::credentials::Credentials;
use crate::market_data::{BarsRequest, BarsSource};
use crate::models::{Bar, BarTable};
use crate::{Result, TrendviewError};

/// Path of the multi-symbol stock bars endpoint.
const BARS_PATH: &str = "/v2/stocks/bars";

/// Upper bound on pages followed for a single query.
const MAX_PAGES: usize = 100;

/// Historical bars client for Alpaca Market Data v2.
///
/// Holds only the HTTP connection pool, the credential pair and the
/// provider options; it can be shared freely between calls.
pub struct AlpacaClient {
    http: Client,
    bars_url: String,
    credentials: Credentials,
    options: AlpacaBarsParams,
}

impl AlpacaClient {
    /// Builds a client from configuration.
    ///
    /// Credentials are not checked here; a bad or missing pair surfaces as
    /// an authentication error from the first request.
    ///
    /// # Errors
    ///
    /// Returns [`TrendviewError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &MarketDataConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("trendview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            bars_url: format!("{}{}", config.base_url.trim_end_matches('/'), BARS_PATH),
            credentials: config.credentials.clone(),
            options: AlpacaBarsParams {
                feed: config.feed,
                adjustment: config.adjustment,
            },
        })
    }

    /// Fetches one page and returns the parsed body.
    async fn fetch_page(
        &self,
        request: &BarsRequest,
        page_token: Option<&str>,
    ) -> Result<AlpacaResponse> {
        let query = construct_params(request, &self.options, page_token);

        // Invalid header characters in the credentials fail at `send`.
        let response = self
            .http
            .get(&self.bars_url)
            .header("APCA-API-KEY-ID", self.credentials.api_key())
            .header("APCA-API-SECRET-KEY", self.credentials.api_secret())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AlpacaErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        body.trim().to_string()
                    }
                });
            warn!(status = status.as_u16(), %message, "bars request rejected");
            return Err(TrendviewError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BarsSource for AlpacaClient {
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<BarTable> {
        if request.symbols.is_empty() {
            return Err(TrendviewError::Config("no symbols requested".into()));
        }

        let mut by_symbol: IndexMap<String, Vec<Bar>> = IndexMap::new();
        let mut page_token: Option<String> = None;

        for page in 1..=MAX_PAGES {
            let response = self.fetch_page(request, page_token.as_deref()).await?;

            let page_rows = response.bars.unwrap_or_default();
            debug!(page, symbols = page_rows.len(), "received bars page");
            for (symbol, bars) in page_rows {
                let rows = bars.into_iter().map(|b| b.into_bar(&symbol));
                by_symbol.entry(symbol.clone()).or_default().extend(rows);
            }

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => {
                    let table = BarTable::Composite(by_symbol);
                    info!(
                        symbols = %request.symbols.join(","),
                        rows = table.len(),
                        pages = page,
                        "fetched bars"
                    );
                    return Ok(table);
                }
            }
        }

        Err(TrendviewError::MalformedResponse(format!(
            "pagination did not finish after {MAX_PAGES} pages"
        )))
    }
}
