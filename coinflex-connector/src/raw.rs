//! Raw CoinFlex response types.
//!
//! Wire shapes of the venue's REST payloads. Each record carries a
//! flattened `extra` map so fields this adapter does not model survive
//! into the verbatim `info` echo on canonical objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One asset record from `GET assets/`.
///
/// Identifies a currency/unit traded on the venue. Immutable once
/// fetched; lives for one markets-refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAsset {
    /// Venue-internal integer id
    pub id: i64,
    /// Venue currency name (e.g., "XBT")
    pub name: String,
    /// Spot variant name, preferred for currency-code derivation
    #[serde(default)]
    pub spot_name: Option<String>,
    /// Spot variant id
    #[serde(default)]
    pub spot_id: Option<String>,
    /// Decimal scale of amounts in this asset
    #[serde(default)]
    pub scale: Option<u32>,
    /// Unmodeled venue fields, preserved for the info echo
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One market record from `GET markets/`.
///
/// References two assets by integer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMarket {
    /// Venue-native market name (e.g., "XBT:USD")
    pub name: String,
    /// Base asset id
    pub base: i64,
    /// Quote (counter) asset id
    pub counter: i64,
    /// Expiry in epoch milliseconds; absent for perpetual markets
    #[serde(default)]
    pub expires: Option<i64>,
    /// Unmodeled venue fields, preserved for the info echo
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One ticker record from `GET tickers/` or `GET tickers/{base}:{counter}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTicker {
    /// Venue-native market name, the key for market reconciliation
    pub name: String,
    /// Snapshot time in epoch microseconds
    pub time: i64,
    /// Period high
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Period low
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Best bid
    #[serde(default)]
    pub bid: Option<Decimal>,
    /// Best ask
    #[serde(default)]
    pub ask: Option<Decimal>,
    /// Last trade price
    #[serde(default)]
    pub last: Option<Decimal>,
    /// Period volume in base currency
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Unmodeled venue fields, preserved for the info echo
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Depth payload from `GET depth/{base}:{counter}`.
///
/// Two parallel lists of `[price, size]` levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDepth {
    /// Bid levels as `[price, size]`
    #[serde(default)]
    pub bids: Vec<(Decimal, Decimal)>,
    /// Ask levels as `[price, size]`
    #[serde(default)]
    pub asks: Vec<(Decimal, Decimal)>,
}

// =============================================================================
// Tests
// =============================================================================
