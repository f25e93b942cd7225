//! Alpaca Market Data v2 historical stock bars.
//!
//! See <https://docs.alpaca.markets/reference/stockbars>.

pub mod client;
pub mod params;
pub mod response;

pub use client::AlpacaClient;
