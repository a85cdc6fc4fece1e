//! Canned CoinFlex REST payloads.
//!
//! Shapes follow the venue's REST API: asset/market ids are integers,
//! market names are "BASE:COUNTER", ticker time is in microseconds,
//! depth is two lists of [price, size].

use serde_json::{json, Value};

/// Fixed "now" used by tests, safely past the futures expiry below.
pub const NOW_MILLIS: i64 = 1_600_000_000_000;

/// `GET assets/` payload: two spot assets, one expiring variant, one
/// quote currency. The variant resolves through `spot_name`.
pub fn assets() -> Value {
    json!([
        { "id": 63488, "name": "XBT", "scale": 8 },
        { "id": 63489, "name": "XBT Dec17", "spot_name": "XBT", "spot_id": "63488", "scale": 8 },
        { "id": 63632, "name": "ETH", "scale": 8 },
        { "id": 65284, "name": "USD", "scale": 4 }
    ])
}

/// `GET markets/` payload: two perpetual markets and one expired future.
pub fn markets() -> Value {
    json!([
        { "name": "XBT:USD", "base": 63488, "counter": 65284 },
        { "name": "ETH:USD", "base": 63632, "counter": 65284 },
        { "name": "XBTZ17:USD", "base": 63489, "counter": 65284, "expires": 1514764800000_i64 }
    ])
}

/// Market list where two venue markets share one canonical symbol.
pub fn duplicate_symbol_markets() -> Value {
    json!([
        { "name": "XBT:USD", "base": 63488, "counter": 65284 },
        { "name": "XBTW:USD", "base": 63488, "counter": 65284 }
    ])
}

/// `GET tickers/` payload matching [`markets`].
pub fn tickers() -> Value {
    json!([
        {
            "name": "XBT:USD",
            "time": 1500000500000_i64,
            "high": 15100.0,
            "low": 14900.0,
            "bid": 15000.0,
            "ask": 15001.0,
            "last": 15000.5,
            "volume": 42.0
        },
        {
            "name": "ETH:USD",
            "time": 1500000500000_i64,
            "high": 310.0,
            "low": 290.0,
            "bid": 300.0,
            "ask": 300.5,
            "last": 300.25,
            "volume": 100.0
        }
    ])
}

/// Ticker list where both entries resolve to the same symbol; the
/// second one carries the later data.
pub fn duplicate_symbol_tickers() -> Value {
    json!([
        {
            "name": "XBT:USD",
            "time": 1500000500000_i64,
            "last": 15000.5
        },
        {
            "name": "XBTW:USD",
            "time": 1500000600000_i64,
            "last": 15010.0
        }
    ])
}

/// `GET depth/{base}:{counter}` payload.
pub fn depth() -> Value {
    json!({
        "bids": [[15000.0, 2.0], [14999.0, 1.0]],
        "asks": [[15001.0, 1.5], [15002.0, 3.0]]
    })
}

/// `GET balances/` payload (private endpoint).
pub fn balances() -> Value {
    json!([
        { "id": 63488, "available": 100000000_i64, "reserved": 0 },
        { "id": 65284, "available": 5000000_i64, "reserved": 0 }
    ])
}
