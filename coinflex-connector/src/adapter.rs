//! CoinFlex Adapter Facade
//!
//! Ties the resolver, normalizer, and signer together behind the
//! venue-agnostic fetch surface. The transport, clock, and currency
//! codec are injected capabilities, so everything here is testable
//! without network access.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use coinflex_domain::{ApiCredentials, Market, OrderBookSnapshot, Symbol, Ticker};

use crate::book::parse_order_book;
use crate::error::{AdapterError, AdapterResult};
use crate::ports::{Clock, CurrencyCodec, HttpTransport, StandardCurrencyCodec, SystemClock};
use crate::raw::{RawAsset, RawMarket, RawTicker};
use crate::resolver::resolve_markets;
use crate::signer::{HttpMethod, RequestSigner};
use crate::ticker::normalize_ticker;

// =============================================================================
// Identity and Endpoints
// =============================================================================

/// Production API base URL (public and private share one host).
pub const API_URL: &str = "https://webapi.coinflex.com";

/// Static identity of this adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeDescriptor {
    /// Adapter id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Base interval between requests; consumed by the caller's rate
    /// limiter, not enforced here
    pub rate_limit: Duration,
}

/// This venue's descriptor.
pub const DESCRIPTOR: ExchangeDescriptor = ExchangeDescriptor {
    id: "coinflex",
    name: "CoinFlex",
    rate_limit: Duration::from_millis(2000),
};

/// Venue endpoint routing table. `{base}` and `{counter}` placeholders
/// are substituted from the resolved market's integer asset ids.
pub mod endpoints {
    /// Public asset list
    pub const ASSETS: &str = "assets/";
    /// Public market list
    pub const MARKETS: &str = "markets/";
    /// Public ticker list
    pub const TICKERS: &str = "tickers/";
    /// Public single ticker by asset-id pair
    pub const TICKER_BY_PAIR: &str = "tickers/{base}:{counter}";
    /// Public depth by asset-id pair
    pub const DEPTH_BY_PAIR: &str = "depth/{base}:{counter}";
    /// Private balance list
    pub const BALANCES: &str = "balances/";
}

// =============================================================================
// Market Table
// =============================================================================

/// Indexed view over one markets refresh.
///
/// Replaced wholesale (a single Arc swap) on every refresh; readers
/// holding the previous table are unaffected.
#[derive(Debug)]
struct MarketTable {
    by_symbol: HashMap<Symbol, Market>,
    by_venue_name: HashMap<String, Market>,
}

impl MarketTable {
    fn build(markets: &[Market]) -> Self {
        let mut by_symbol = HashMap::with_capacity(markets.len());
        let mut by_venue_name = HashMap::with_capacity(markets.len());
        for market in markets {
            // Later markets win on symbol collisions, mirroring insertion order
            by_symbol.insert(market.symbol.clone(), market.clone());
            by_venue_name.insert(market.id.clone(), market.clone());
        }
        Self { by_symbol, by_venue_name }
    }

    fn by_symbol(&self, symbol: &Symbol) -> Option<&Market> {
        self.by_symbol.get(symbol)
    }

    fn by_venue_name(&self, name: &str) -> Option<&Market> {
        self.by_venue_name.get(name)
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Single-exchange market-data adapter for CoinFlex.
///
/// Normalizes the venue's REST responses into the canonical data model
/// and constructs authenticated requests. All operations are sequential
/// request/response transforms; the market cache is the only shared
/// state and is swapped atomically on refresh.
pub struct CoinflexAdapter {
    transport: Arc<dyn HttpTransport>,
    signer: RequestSigner,
    clock: Arc<dyn Clock>,
    codec: Arc<dyn CurrencyCodec>,
    markets: RwLock<Option<Arc<MarketTable>>>,
}

impl CoinflexAdapter {
    /// Create a public-only adapter with the default clock and codec.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_parts(
            transport,
            None,
            Arc::new(SystemClock),
            Arc::new(StandardCurrencyCodec::new()),
        )
    }

    /// Create an adapter with credentials for private endpoints.
    pub fn with_credentials(transport: Arc<dyn HttpTransport>, credentials: ApiCredentials) -> Self {
        Self::with_parts(
            transport,
            Some(credentials),
            Arc::new(SystemClock),
            Arc::new(StandardCurrencyCodec::new()),
        )
    }

    /// Create an adapter with every capability injected.
    pub fn with_parts(
        transport: Arc<dyn HttpTransport>,
        credentials: Option<ApiCredentials>,
        clock: Arc<dyn Clock>,
        codec: Arc<dyn CurrencyCodec>,
    ) -> Self {
        Self {
            transport,
            signer: RequestSigner::new(API_URL, credentials),
            clock,
            codec,
            markets: RwLock::new(None),
        }
    }

    /// Whether private endpoints are usable with the stored credentials.
    pub fn has_private_access(&self) -> bool {
        self.signer.has_credentials()
    }

    async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
        private: bool,
    ) -> AdapterResult<serde_json::Value> {
        let request = self.signer.sign(path, HttpMethod::Get, params, None, private)?;
        self.transport.execute(request).await
    }

    /// Fetch and resolve the market list, replacing the cached table.
    ///
    /// Assets and markets are fetched as two sequential calls; the join
    /// happens locally in the resolver.
    pub async fn fetch_markets(&self) -> AdapterResult<Vec<Market>> {
        let assets_payload = self.get(endpoints::ASSETS, &[], false).await?;
        let markets_payload = self.get(endpoints::MARKETS, &[], false).await?;

        let assets: Vec<RawAsset> = serde_json::from_value(assets_payload)
            .map_err(|e| AdapterError::Parse(format!("Invalid assets payload: {}", e)))?;
        let raw_markets: Vec<RawMarket> = serde_json::from_value(markets_payload)
            .map_err(|e| AdapterError::Parse(format!("Invalid markets payload: {}", e)))?;

        let resolved = resolve_markets(
            &assets,
            &raw_markets,
            self.clock.now_millis(),
            self.codec.as_ref(),
        )?;

        let table = Arc::new(MarketTable::build(&resolved));
        *self.markets.write().await = Some(table);
        info!(market_count = resolved.len(), "refreshed market table");

        Ok(resolved)
    }

    /// Load markets if the cache is empty.
    pub async fn load_markets(&self) -> AdapterResult<()> {
        self.table().await.map(|_| ())
    }

    async fn table(&self) -> AdapterResult<Arc<MarketTable>> {
        if let Some(table) = self.markets.read().await.as_ref() {
            return Ok(Arc::clone(table));
        }
        debug!("market cache empty, refreshing");
        self.fetch_markets().await?;
        self.markets
            .read()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| AdapterError::Parse("Market table empty after refresh".to_string()))
    }

    /// Fetch all tickers, keyed by canonical symbol.
    ///
    /// Each raw ticker is reconciled to its market by the payload's
    /// venue market name; a name missing from the cache fails the call.
    /// When two markets map to the same symbol, the later ticker wins.
    pub async fn fetch_tickers(&self) -> AdapterResult<HashMap<Symbol, Ticker>> {
        let table = self.table().await?;
        let payload = self.get(endpoints::TICKERS, &[], false).await?;
        let entries = payload
            .as_array()
            .ok_or_else(|| AdapterError::Parse("Tickers payload is not an array".to_string()))?;

        let mut result = HashMap::with_capacity(entries.len());
        for entry in entries {
            let raw: RawTicker = serde_json::from_value(entry.clone())
                .map_err(|e| AdapterError::Parse(format!("Invalid ticker payload: {}", e)))?;
            let market = table
                .by_venue_name(&raw.name)
                .ok_or_else(|| AdapterError::UnknownMarket(raw.name.clone()))?;
            let ticker = normalize_ticker(&raw, entry.clone(), market);
            result.insert(ticker.symbol.clone(), ticker);
        }
        Ok(result)
    }

    /// Fetch a single ticker by canonical symbol.
    pub async fn fetch_ticker(&self, symbol: &Symbol) -> AdapterResult<Ticker> {
        let table = self.table().await?;
        let market = table
            .by_symbol(symbol)
            .ok_or_else(|| AdapterError::UnknownSymbol(symbol.as_pair()))?;

        let params = [
            ("base", market.base_id.to_string()),
            ("counter", market.quote_id.to_string()),
        ];
        let payload = self.get(endpoints::TICKER_BY_PAIR, &params, false).await?;
        let raw: RawTicker = serde_json::from_value(payload.clone())
            .map_err(|e| AdapterError::Parse(format!("Invalid ticker payload: {}", e)))?;

        Ok(normalize_ticker(&raw, payload, market))
    }

    /// Fetch the order book for a symbol.
    ///
    /// A supplied `limit` travels as a plain query parameter; depth
    /// parsing is the generic `[price, size]` pass-through.
    pub async fn fetch_order_book(
        &self,
        symbol: &Symbol,
        limit: Option<u32>,
    ) -> AdapterResult<OrderBookSnapshot> {
        let table = self.table().await?;
        let market = table
            .by_symbol(symbol)
            .ok_or_else(|| AdapterError::UnknownSymbol(symbol.as_pair()))?;

        let mut params = vec![
            ("base", market.base_id.to_string()),
            ("counter", market.quote_id.to_string()),
        ];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        let payload = self.get(endpoints::DEPTH_BY_PAIR, &params, false).await?;

        parse_order_book(&payload, market.symbol.clone())
    }

    /// Fetch the raw balance list from the private endpoint.
    ///
    /// Balance normalization is unspecified for this venue; the payload
    /// is returned as-is. Requires complete credentials.
    pub async fn fetch_balances(&self) -> AdapterResult<serde_json::Value> {
        self.load_markets().await?;
        self.get(endpoints::BALANCES, &[], true).await
    }
}

// =============================================================================
// Tests
// =============================================================================
