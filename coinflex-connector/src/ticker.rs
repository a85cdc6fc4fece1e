//! Ticker Normalizer
//!
//! Maps a raw venue ticker into the canonical shape. Market resolution
//! happens before this point: the caller looks the market up by the
//! payload's `name` field and fails the call if none matches.

use chrono::TimeZone;
use serde_json::Value;

use coinflex_domain::{Market, Ticker};

use crate::raw::RawTicker;

/// Microseconds per second, for the venue's timestamp unit.
const MICROS_PER_SECOND: i64 = 1_000_000;

/// Normalize a raw ticker against its resolved market.
///
/// The venue reports time in microseconds; integer division truncates
/// toward zero to whole seconds. This truncation (never rounding) is an
/// exact-replication requirement for downstream consumers. `last`
/// populates both `last` and `close`; fields the venue does not supply
/// stay `None`.
pub fn normalize_ticker(raw: &RawTicker, raw_info: Value, market: &Market) -> Ticker {
    let timestamp = raw.time / MICROS_PER_SECOND;
    let datetime = chrono::Utc.timestamp_opt(timestamp, 0).single();
    let last = raw.last;

    Ticker {
        symbol: market.symbol.clone(),
        timestamp,
        datetime,
        high: raw.high,
        low: raw.low,
        bid: raw.bid,
        bid_volume: None,
        ask: raw.ask,
        ask_volume: None,
        vwap: None,
        open: None,
        close: last,
        last,
        previous_close: None,
        change: None,
        percentage: None,
        average: None,
        base_volume: raw.volume,
        quote_volume: None,
        info: raw_info,
    }
}

// =============================================================================
// Tests
// =============================================================================
