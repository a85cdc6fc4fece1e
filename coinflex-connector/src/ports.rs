//! Adapter port definitions.
//!
//! Ports define the interfaces for the capabilities the adapter borrows
//! from its runtime: HTTP transport, wall clock, and currency code
//! canonicalization. Adapters implement these ports for real services
//! (reqwest transport) or tests (stub transport, fixed clock).

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::AdapterResult;
use crate::signer::PreparedRequest;

// =============================================================================
// HTTP Transport Port
// =============================================================================

/// Port for executing prepared HTTP requests.
///
/// Implementations:
/// - `StubTransport` - For testing (canned responses)
/// - `RestTransport` - Real HTTP via reqwest
///
/// Timeouts, retries, and rate limiting belong to the implementation;
/// the adapter core never retries and never suppresses transport errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a request and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// `AdapterError::Transport` for network/HTTP failures,
    /// `AdapterError::Parse` when the body is not valid JSON.
    async fn execute(&self, request: PreparedRequest) -> AdapterResult<serde_json::Value>;
}

// =============================================================================
// Clock Port
// =============================================================================

/// Port for the wall clock, injected so market resolution stays a pure
/// function of its inputs.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// System clock backed by chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

// =============================================================================
// Currency Codec Port
// =============================================================================

/// Port for canonicalizing venue currency codes.
///
/// A pure `string -> string` function: uppercasing plus alias
/// resolution. Owned by the runtime so all adapters agree on codes.
pub trait CurrencyCodec: Send + Sync {
    /// Map a venue currency name to its canonical code.
    fn canonical_code(&self, raw: &str) -> String;
}

/// Default codec: uppercase, then resolve well-known aliases.
#[derive(Debug, Clone)]
pub struct StandardCurrencyCodec {
    aliases: HashMap<&'static str, &'static str>,
}

impl StandardCurrencyCodec {
    /// Create the codec with the standard alias table.
    pub fn new() -> Self {
        let aliases = HashMap::from([
            ("XBT", "BTC"),
            ("BCC", "BCH"),
            ("DRK", "DASH"),
        ]);
        Self { aliases }
    }
}

impl Default for StandardCurrencyCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyCodec for StandardCurrencyCodec {
    fn canonical_code(&self, raw: &str) -> String {
        let upper = raw.to_uppercase();
        match self.aliases.get(upper.as_str()) {
            Some(canonical) => (*canonical).to_string(),
            None => upper,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
