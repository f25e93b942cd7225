//! Provider-neutral market data models.
//!
//! Wire formats live next to the client that speaks them (see
//! [`crate::market_data::alpaca::response`]); everything here is what the
//! rest of the crate consumes.

pub mod bar;
pub mod timeframe;

pub use bar::{Bar, BarTable};
pub use timeframe::{TimeFrame, TimeFrameUnit};
