//! Canonical Ticker
//!
//! Point-in-time price/volume snapshot for one market. Fields the venue
//! does not supply are `None` - never zero, never fabricated.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Canonical ticker snapshot.
///
/// Created per fetch and not persisted. Same raw payload and market
/// always produce an identical ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Canonical trading pair of the resolved market
    pub symbol: Symbol,
    /// Snapshot time in whole seconds since the epoch
    pub timestamp: i64,
    /// Snapshot time as a UTC datetime, when representable
    pub datetime: Option<DateTime<Utc>>,
    /// Highest trade price of the period
    pub high: Option<Decimal>,
    /// Lowest trade price of the period
    pub low: Option<Decimal>,
    /// Best bid price
    pub bid: Option<Decimal>,
    /// Best bid size (not supplied by this venue)
    pub bid_volume: Option<Decimal>,
    /// Best ask price
    pub ask: Option<Decimal>,
    /// Best ask size (not supplied by this venue)
    pub ask_volume: Option<Decimal>,
    /// Volume-weighted average price (not supplied by this venue)
    pub vwap: Option<Decimal>,
    /// Opening price (not supplied by this venue)
    pub open: Option<Decimal>,
    /// Closing price; mirrors `last`
    pub close: Option<Decimal>,
    /// Last trade price
    pub last: Option<Decimal>,
    /// Previous period close (not supplied by this venue)
    pub previous_close: Option<Decimal>,
    /// Absolute price change (not supplied by this venue)
    pub change: Option<Decimal>,
    /// Relative price change (not supplied by this venue)
    pub percentage: Option<Decimal>,
    /// Average price (not supplied by this venue)
    pub average: Option<Decimal>,
    /// Traded volume in base currency
    pub base_volume: Option<Decimal>,
    /// Traded volume in quote currency (not supplied by this venue)
    pub quote_volume: Option<Decimal>,
    /// Verbatim echo of the raw ticker payload
    pub info: serde_json::Value,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_serialization_round_trip() {
        let ticker = Ticker {
            symbol: Symbol::new("BTC", "USD").unwrap(),
            timestamp: 1_500_000,
            datetime: None,
            high: Some(dec!(15100)),
            low: Some(dec!(14900)),
            bid: Some(dec!(15000)),
            bid_volume: None,
            ask: Some(dec!(15001)),
            ask_volume: None,
            vwap: None,
            open: None,
            close: Some(dec!(15000.5)),
            last: Some(dec!(15000.5)),
            previous_close: None,
            change: None,
            percentage: None,
            average: None,
            base_volume: Some(dec!(42)),
            quote_volume: None,
            info: serde_json::Value::Null,
        };

        let json = serde_json::to_string(&ticker).unwrap();
        let parsed: Ticker = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, ticker);
        assert_eq!(parsed.close, parsed.last);
    }
}
