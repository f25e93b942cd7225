//! Deserialization tests for the historical bars wire format.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use trendview::market_data::alpaca::response::{AlpacaErrorBody, AlpacaResponse};

const PAGE1_JSON: &str = include_str!("fixtures/bars_page1.json");
const PAGE2_JSON: &str = include_str!("fixtures/bars_page2.json");
const NO_OPTIONAL_JSON: &str = include_str!("fixtures/bars_without_optional_fields.json");
const EMPTY_JSON: &str = include_str!("fixtures/bars_empty.json");
const NULL_JSON: &str = include_str!("fixtures/bars_null.json");
const INVALID_SYMBOL_JSON: &str = include_str!("fixtures/error_invalid_symbol.json");

#[test]
fn test_bars_page_deserializes() {
    let response: AlpacaResponse =
        serde_json::from_str(PAGE1_JSON).expect("Failed to deserialize bars page");

    assert_eq!(
        response.next_page_token.as_deref(),
        Some("QUFQTHxEfDIwMjQtMDgtMDJUMDQ6MDA6MDAuMDAwMDAwMDAwWg==")
    );

    let bars = response.bars.expect("bars present");
    let aapl = &bars["AAPL"];
    assert_eq!(aapl.len(), 2);

    let first = aapl[0].clone().into_bar("AAPL");
    assert_eq!(first.symbol, "AAPL");
    assert_eq!(first.timestamp, Utc.with_ymd_and_hms(2024, 8, 1, 4, 0, 0).unwrap());
    assert_eq!(first.open, dec!(224.37));
    assert_eq!(first.high, dec!(224.48));
    assert_eq!(first.low, dec!(217.02));
    assert_eq!(first.close, dec!(218.36));
    assert_eq!(first.volume, 62_501_000);
    assert_eq!(first.trade_count, Some(869_732));
    assert_eq!(first.vwap, Some(dec!(219.823123)));
}

#[test]
fn test_last_page_has_no_token() {
    let response: AlpacaResponse =
        serde_json::from_str(PAGE2_JSON).expect("Failed to deserialize bars page");

    assert!(response.next_page_token.is_none());
    let bars = response.bars.expect("bars present");
    assert_eq!(bars["AAPL"][0].low, dec!(196));
}

#[test]
fn test_optional_fields_may_be_absent() {
    let response: AlpacaResponse =
        serde_json::from_str(NO_OPTIONAL_JSON).expect("Failed to deserialize bars page");

    assert!(response.next_page_token.is_none());
    let bar = response.bars.expect("bars present")["MSFT"][0]
        .clone()
        .into_bar("MSFT");
    assert_eq!(bar.close, dec!(417.11));
    assert!(bar.trade_count.is_none());
    assert!(bar.vwap.is_none());
}

#[test]
fn test_empty_and_null_bars_deserialize() {
    let empty: AlpacaResponse = serde_json::from_str(EMPTY_JSON).unwrap();
    assert!(empty.bars.expect("empty map").is_empty());

    let null: AlpacaResponse = serde_json::from_str(NULL_JSON).unwrap();
    assert!(null.bars.is_none());

    let bare: AlpacaResponse = serde_json::from_str("{}").unwrap();
    assert!(bare.bars.is_none());
    assert!(bare.next_page_token.is_none());
}

#[test]
fn test_error_body_deserializes() {
    let body: AlpacaErrorBody = serde_json::from_str(INVALID_SYMBOL_JSON).unwrap();
    assert_eq!(body.message, "invalid symbol: $$$");
}
