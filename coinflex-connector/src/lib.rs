//! CoinFlex Exchange Connector
//!
//! Normalizes CoinFlex's REST responses (assets, markets, tickers,
//! depth) into the venue-agnostic data model and constructs
//! authenticated requests. Transport, clock, and currency
//! canonicalization are injected ports.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod adapter;
pub mod book;
pub mod error;
pub mod ports;
pub mod raw;
pub mod resolver;
pub mod signer;
pub mod stub;
pub mod ticker;
pub mod transport;

// Re-exports
pub use adapter::{endpoints, CoinflexAdapter, ExchangeDescriptor, API_URL, DESCRIPTOR};
pub use book::parse_order_book;
pub use error::{AdapterError, AdapterResult};
pub use ports::{Clock, CurrencyCodec, HttpTransport, StandardCurrencyCodec, SystemClock};
pub use raw::{RawAsset, RawDepth, RawMarket, RawTicker};
pub use resolver::{prepare_assets, resolve_markets, PreparedAsset, PreparedAssetIndex};
pub use signer::{HttpMethod, PreparedRequest, RequestSigner};
pub use stub::{FixedClock, StubTransport};
pub use ticker::normalize_ticker;
pub use transport::RestTransport;
