//! CoinFlex Adapter Domain Layer
//!
//! Venue-agnostic market data model with zero I/O dependencies.
//! Contains the canonical types the connector normalizes into.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod book;
pub mod credentials;
pub mod market;
pub mod symbol;
pub mod ticker;

// Re-export commonly used types
pub use book::OrderBookSnapshot;
pub use credentials::ApiCredentials;
pub use market::Market;
pub use symbol::{DomainError, Symbol};
pub use ticker::Ticker;
