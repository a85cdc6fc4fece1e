//! Order Book Snapshot
//!
//! The set of outstanding bid/ask price levels for one market at a
//! point in time, most-aggressive level first on both sides.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Snapshot of the order book at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Canonical trading pair
    pub symbol: Symbol,
    /// Bid levels, highest price first
    pub bids: Vec<(Decimal, Decimal)>, // (price, size)
    /// Ask levels, lowest price first
    pub asks: Vec<(Decimal, Decimal)>, // (price, size)
    /// Snapshot time, when the venue supplies one
    pub timestamp: Option<DateTime<Utc>>,
}

impl OrderBookSnapshot {
    /// Create a new order book snapshot.
    pub fn new(
        symbol: Symbol,
        bids: Vec<(Decimal, Decimal)>,
        asks: Vec<(Decimal, Decimal)>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self { symbol, bids, asks, timestamp }
    }

    /// Get the best bid price (highest bid).
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|(price, _)| *price)
    }

    /// Get the best ask price (lowest ask).
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|(price, _)| *price)
    }

    /// Get the midpoint price (best bid + best ask) / 2.
    pub fn midpoint(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_book_best_prices() {
        let symbol = Symbol::new("BTC", "USD").unwrap();
        let bids = vec![(dec!(14999), dec!(1.0)), (dec!(14998), dec!(2.0))];
        let asks = vec![(dec!(15001), dec!(1.0)), (dec!(15002), dec!(2.0))];
        let ob = OrderBookSnapshot::new(symbol, bids, asks, None);

        assert_eq!(ob.best_bid(), Some(dec!(14999)));
        assert_eq!(ob.best_ask(), Some(dec!(15001)));
        assert_eq!(ob.midpoint(), Some(dec!(15000)));
        assert_eq!(ob.spread(), Some(dec!(2)));
    }

    #[test]
    fn test_order_book_empty_sides() {
        let symbol = Symbol::new("BTC", "USD").unwrap();
        let ob = OrderBookSnapshot::new(symbol, vec![], vec![], None);

        assert_eq!(ob.best_bid(), None);
        assert_eq!(ob.best_ask(), None);
        assert_eq!(ob.midpoint(), None);
        assert_eq!(ob.spread(), None);
    }
}
