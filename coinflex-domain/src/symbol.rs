//! Symbol Value Object
//!
//! Canonical cross-venue trading pair representation.
//! Invariants are enforced at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain errors for value object validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Symbol must have non-empty base and quote currencies
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Credentials must have all required fields
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

// =============================================================================
// Symbol
// =============================================================================

/// Symbol represents a canonical trading pair (e.g., BTC/USD)
///
/// The pair form is always `base + "/" + quote`, so the canonical
/// symbol invariant holds by construction.
///
/// # Invariants
/// - Base and quote must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    base: String,
    quote: String,
}

impl Symbol {
    /// Create a Symbol from explicit base and quote currency codes
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSymbol` if base or quote is empty
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Result<Self, DomainError> {
        let base = base.into();
        let quote = quote.into();
        if base.is_empty() || quote.is_empty() {
            return Err(DomainError::InvalidSymbol(
                "Base and quote must be non-empty".to_string(),
            ));
        }
        Ok(Self { base, quote })
    }

    /// Create a Symbol from a slash-separated pair string
    ///
    /// # Examples
    /// ```
    /// # use coinflex_domain::symbol::Symbol;
    /// let symbol = Symbol::from_pair("BTC/USD").unwrap();
    /// assert_eq!(symbol.base(), "BTC");
    /// assert_eq!(symbol.quote(), "USD");
    /// ```
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSymbol` if the format is invalid
    pub fn from_pair(pair: &str) -> Result<Self, DomainError> {
        match pair.split_once('/') {
            Some((base, quote)) => Self::new(base, quote),
            None => Err(DomainError::InvalidSymbol(format!(
                "Cannot parse trading pair: {}",
                pair
            ))),
        }
    }

    /// Get the base currency code
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Get the quote currency code
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Get the canonical pair string (e.g., "BTC/USD")
    pub fn as_pair(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_pair())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_new() {
        let symbol = Symbol::new("BTC", "USD").unwrap();
        assert_eq!(symbol.base(), "BTC");
        assert_eq!(symbol.quote(), "USD");
        assert_eq!(symbol.as_pair(), "BTC/USD");
    }

    #[test]
    fn test_symbol_from_pair() {
        let symbol = Symbol::from_pair("ETH/USD").unwrap();
        assert_eq!(symbol.base(), "ETH");
        assert_eq!(symbol.quote(), "USD");
    }

    #[test]
    fn test_symbol_pair_equals_base_slash_quote() {
        let symbol = Symbol::new("XRP", "EUR").unwrap();
        assert_eq!(symbol.as_pair(), format!("{}/{}", symbol.base(), symbol.quote()));
    }

    #[test]
    fn test_symbol_invalid() {
        assert!(Symbol::from_pair("BTCUSD").is_err());
        assert!(Symbol::from_pair("").is_err());
        assert!(Symbol::new("", "USD").is_err());
        assert!(Symbol::new("BTC", "").is_err());
    }

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::new("BTC", "USD").unwrap();
        assert_eq!(symbol.to_string(), "BTC/USD");
    }
}
