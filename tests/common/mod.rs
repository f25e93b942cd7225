//! Shared test utilities: bar builders, a scripted bars source and a
//! minimal HTTP server standing in for the market data API.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use trendview::config::MarketDataConfig;
use trendview::credentials::Credentials;
use trendview::market_data::{BarsRequest, BarsSource};
use trendview::models::{Bar, BarTable};
use trendview::{Result, TrendviewError};

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A daily bar `day` days after 2024-08-01.
pub fn bar(symbol: &str, day: i64, close: Decimal, volume: u64) -> Bar {
    let timestamp = Utc.with_ymd_and_hms(2024, 8, 1, 4, 0, 0).unwrap() + Duration::days(day);
    Bar {
        symbol: symbol.to_string(),
        timestamp,
        open: close,
        high: close,
        low: close,
        close,
        volume,
        trade_count: None,
        vwap: None,
    }
}

/// What a [`ScriptedSource`] answers with.
pub enum Script {
    Table(BarTable),
    Api { status: u16, message: String },
    Malformed(String),
}

/// A [`BarsSource`] that replays one scripted answer and records requests.
pub struct ScriptedSource {
    script: Script,
    pub requests: Mutex<Vec<BarsRequest>>,
}

impl ScriptedSource {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn table(table: BarTable) -> Self {
        Self::new(Script::Table(table))
    }

    pub fn requests(&self) -> Vec<BarsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BarsSource for ScriptedSource {
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<BarTable> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Table(table) => Ok(table.clone()),
            Script::Api { status, message } => Err(TrendviewError::Api {
                status: *status,
                message: message.clone(),
            }),
            Script::Malformed(message) => Err(TrendviewError::MalformedResponse(message.clone())),
        }
    }
}

/// One canned HTTP response.
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// HTTP/1.1 server answering each connection with the next canned response.
pub struct FakeServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    /// Binds to an ephemeral port and serves `responses` in order.
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let mut queue: VecDeque<CannedResponse> = responses.into();

        tokio::spawn(async move {
            while let Some(canned) = queue.pop_front() {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let head = read_head(&mut socket).await;
                recorded.lock().unwrap().push(head);

                let reply = format!(
                    "HTTP/1.1 {} Fake\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    canned.status,
                    canned.body.len(),
                    canned.body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Raw request heads received so far (request line plus headers).
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Client configuration pointing at this server.
    pub fn config(&self, credentials: Credentials) -> MarketDataConfig {
        MarketDataConfig::new(self.base_url.clone(), credentials)
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Test credentials.
pub fn credentials() -> Credentials {
    Credentials::new("PKTESTKEY", "test-secret")
}
