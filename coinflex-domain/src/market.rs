//! Canonical Market
//!
//! Venue-agnostic description of one tradable pair, produced by the
//! connector's asset/market resolver and cached by the caller.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Canonical market record.
///
/// Replaced wholesale on each markets refresh; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Venue-native market name (e.g., "XBT:USD")
    pub id: String,
    /// Canonical trading pair; the pair string is always base + "/" + quote
    pub symbol: Symbol,
    /// Venue-internal integer id of the base asset
    pub base_id: i64,
    /// Venue-internal integer id of the quote asset
    pub quote_id: i64,
    /// False only when the market carries an expiry that has passed
    pub active: bool,
    /// Verbatim echo of the upstream collections used to resolve this market
    pub info: serde_json::Value,
}

impl Market {
    /// Get the canonical base currency code
    pub fn base(&self) -> &str {
        self.symbol.base()
    }

    /// Get the canonical quote currency code
    pub fn quote(&self) -> &str {
        self.symbol.quote()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_currency_accessors() {
        let market = Market {
            id: "XBT:USD".to_string(),
            symbol: Symbol::new("BTC", "USD").unwrap(),
            base_id: 63488,
            quote_id: 65284,
            active: true,
            info: serde_json::Value::Null,
        };

        assert_eq!(market.base(), "BTC");
        assert_eq!(market.quote(), "USD");
        assert_eq!(market.symbol.as_pair(), "BTC/USD");
    }
}
