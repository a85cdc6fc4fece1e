//! Adapter error types.

use thiserror::Error;

/// Errors that can occur while normalizing venue data or building requests.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// An asset id referenced by a market is absent from the asset index
    #[error("Unknown asset id {asset_id} referenced by market {market}")]
    UnknownAsset {
        /// Venue-native name of the market being resolved
        market: String,
        /// The asset id that failed to resolve
        asset_id: i64,
    },

    /// A ticker references a venue market name absent from the market cache
    #[error("No market found for venue name: {0}")]
    UnknownMarket(String),

    /// A caller-supplied symbol is absent from the market cache
    #[error("No market found for symbol: {0}")]
    UnknownSymbol(String),

    /// A private request was attempted without complete credentials
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Network/HTTP-layer error (owned by the transport, never retried here)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to parse a venue response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Domain validation error
    #[error("Domain error: {0}")]
    Domain(#[from] coinflex_domain::DomainError),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
