//! Daily stock price trend and volume viewer.
//!
//! Fetches daily bars for one symbol from the Alpaca market data API over a
//! user-selected window and shows them as a table, a closing-price line and
//! a volume bar chart in the terminal.

pub mod config;
pub mod credentials;
pub mod error;
pub mod market_data;
pub mod models;
pub mod range;
pub mod tui;
pub mod view;

pub use error::{Result, TrendviewError};
