//! Generic order-book parsing.
//!
//! The depth endpoint returns two parallel lists of `[price, size]`
//! levels. This parser is generic across venues that use that shape;
//! the adapter contributes no bespoke depth logic beyond request
//! construction.

use serde_json::Value;

use coinflex_domain::{OrderBookSnapshot, Symbol};

use crate::error::{AdapterError, AdapterResult};
use crate::raw::RawDepth;

/// Parse a raw depth payload into an order book snapshot.
///
/// Levels are ordered most-aggressive first: bids by descending price,
/// asks by ascending price.
pub fn parse_order_book(payload: &Value, symbol: Symbol) -> AdapterResult<OrderBookSnapshot> {
    let depth: RawDepth = serde_json::from_value(payload.clone())
        .map_err(|e| AdapterError::Parse(format!("Invalid depth payload: {}", e)))?;

    let mut bids = depth.bids;
    let mut asks = depth.asks;
    bids.sort_by(|a, b| b.0.cmp(&a.0));
    asks.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(OrderBookSnapshot::new(symbol, bids, asks, None))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_order_book() {
        let payload = json!({
            "bids": [[14999.0, 1.0], [15000.0, 2.0]],
            "asks": [[15002.0, 3.0], [15001.0, 1.5]]
        });
        let symbol = Symbol::new("BTC", "USD").unwrap();

        let book = parse_order_book(&payload, symbol).unwrap();

        // Most-aggressive first on both sides
        assert_eq!(book.bids[0], (dec!(15000), dec!(2)));
        assert_eq!(book.bids[1], (dec!(14999), dec!(1)));
        assert_eq!(book.asks[0], (dec!(15001), dec!(1.5)));
        assert_eq!(book.asks[1], (dec!(15002), dec!(3)));
        assert_eq!(book.best_bid(), Some(dec!(15000)));
        assert_eq!(book.best_ask(), Some(dec!(15001)));
    }

    #[test]
    fn test_parse_order_book_empty_sides() {
        let payload = json!({"bids": [], "asks": []});
        let symbol = Symbol::new("BTC", "USD").unwrap();

        let book = parse_order_book(&payload, symbol).unwrap();
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
    }

    #[test]
    fn test_parse_order_book_malformed() {
        let payload = json!({"bids": [["not-a-number", 1.0]], "asks": []});
        let symbol = Symbol::new("BTC", "USD").unwrap();

        let result = parse_order_book(&payload, symbol);
        assert!(matches!(result, Err(AdapterError::Parse(_))));
    }
}
