//! End-to-end adapter flow against the stub transport.
//!
//! Exercises the full fetch surface: market resolution, ticker
//! normalization, depth, and the private balance request, using the
//! canned payloads from the testkit.

use std::sync::Arc;

use rust_decimal_macros::dec;

use coinflex_connector::{
    AdapterError, CoinflexAdapter, FixedClock, StandardCurrencyCodec, StubTransport, API_URL,
};
use coinflex_domain::{ApiCredentials, Symbol};
use coinflex_testkit as fixtures;

fn url(path: &str) -> String {
    format!("{}/{}", API_URL, path)
}

fn stub_with_markets() -> Arc<StubTransport> {
    let stub = Arc::new(StubTransport::new());
    stub.set_response(&url("assets/"), fixtures::assets());
    stub.set_response(&url("markets/"), fixtures::markets());
    stub
}

fn adapter(stub: Arc<StubTransport>, credentials: Option<ApiCredentials>) -> CoinflexAdapter {
    CoinflexAdapter::with_parts(
        stub,
        credentials,
        Arc::new(FixedClock(fixtures::NOW_MILLIS)),
        Arc::new(StandardCurrencyCodec::new()),
    )
}

#[tokio::test]
async fn test_fetch_markets_resolves_and_flags_expiry() -> anyhow::Result<()> {
    let stub = stub_with_markets();
    let adapter = adapter(Arc::clone(&stub), None);

    let markets = adapter.fetch_markets().await?;
    assert_eq!(markets.len(), 3);

    // XBT is canonicalized to BTC
    assert_eq!(markets[0].id, "XBT:USD");
    assert_eq!(markets[0].symbol.as_pair(), "BTC/USD");
    assert!(markets[0].active);

    assert_eq!(markets[1].symbol.as_pair(), "ETH/USD");
    assert!(markets[1].active);

    // The Dec17 future expired long before the fixed clock
    assert_eq!(markets[2].id, "XBTZ17:USD");
    assert_eq!(markets[2].symbol.as_pair(), "BTC/USD");
    assert!(!markets[2].active);

    // Assets were fetched before markets
    let requests = stub.requests();
    assert_eq!(requests[0].url, url("assets/"));
    assert_eq!(requests[1].url, url("markets/"));
    Ok(())
}

#[tokio::test]
async fn test_fetch_tickers_normalizes_and_keys_by_symbol() -> anyhow::Result<()> {
    let stub = stub_with_markets();
    stub.set_response(&url("tickers/"), fixtures::tickers());
    let adapter = adapter(stub, None);

    let tickers = adapter.fetch_tickers().await?;
    assert_eq!(tickers.len(), 2);

    let btc = &tickers[&Symbol::new("BTC", "USD").unwrap()];
    // Microsecond time truncates to whole seconds
    assert_eq!(btc.timestamp, 1_500_000);
    assert_eq!(btc.last, Some(dec!(15000.5)));
    assert_eq!(btc.close, btc.last);
    assert_eq!(btc.info["name"], "XBT:USD");

    let eth = &tickers[&Symbol::new("ETH", "USD").unwrap()];
    assert_eq!(eth.base_volume, Some(dec!(100)));
    Ok(())
}

#[tokio::test]
async fn test_fetch_tickers_last_write_wins_on_symbol_collision() {
    let stub = Arc::new(StubTransport::new());
    stub.set_response(&url("assets/"), fixtures::assets());
    stub.set_response(&url("markets/"), fixtures::duplicate_symbol_markets());
    stub.set_response(&url("tickers/"), fixtures::duplicate_symbol_tickers());
    let adapter = adapter(stub, None);

    let tickers = adapter.fetch_tickers().await.unwrap();
    assert_eq!(tickers.len(), 1);

    let btc = &tickers[&Symbol::new("BTC", "USD").unwrap()];
    assert_eq!(btc.last, Some(dec!(15010)));
    assert_eq!(btc.info["name"], "XBTW:USD");
}

#[tokio::test]
async fn test_fetch_tickers_unknown_market_name_fails() {
    let stub = stub_with_markets();
    stub.set_response(
        &url("tickers/"),
        serde_json::json!([{ "name": "DOGE:USD", "time": 0 }]),
    );
    let adapter = adapter(stub, None);

    let result = adapter.fetch_tickers().await;
    assert!(matches!(result, Err(AdapterError::UnknownMarket(name)) if name == "DOGE:USD"));
}

#[tokio::test]
async fn test_fetch_ticker_routes_by_asset_id_pair() {
    let stub = stub_with_markets();
    stub.set_response(
        &url("tickers/63632:65284"),
        serde_json::json!({ "name": "ETH:USD", "time": 1500000500000_i64, "last": 300.25 }),
    );
    let adapter = adapter(Arc::clone(&stub), None);

    let symbol = Symbol::new("ETH", "USD").unwrap();
    let ticker = adapter.fetch_ticker(&symbol).await.unwrap();

    assert_eq!(ticker.symbol, symbol);
    assert_eq!(ticker.timestamp, 1_500_000);
    assert_eq!(ticker.last, Some(dec!(300.25)));

    let requests = stub.requests();
    assert_eq!(requests.last().unwrap().url, url("tickers/63632:65284"));
}

#[tokio::test]
async fn test_fetch_ticker_unknown_symbol() {
    let stub = stub_with_markets();
    let adapter = adapter(stub, None);

    let symbol = Symbol::new("DOGE", "USD").unwrap();
    let result = adapter.fetch_ticker(&symbol).await;
    assert!(matches!(result, Err(AdapterError::UnknownSymbol(pair)) if pair == "DOGE/USD"));
}

#[tokio::test]
async fn test_fetch_order_book_forwards_limit_as_query() {
    let stub = stub_with_markets();
    stub.set_response(&url("depth/63632:65284"), fixtures::depth());
    let adapter = adapter(Arc::clone(&stub), None);

    let symbol = Symbol::new("ETH", "USD").unwrap();
    let book = adapter.fetch_order_book(&symbol, Some(5)).await.unwrap();

    assert_eq!(book.symbol, symbol);
    assert_eq!(book.best_bid(), Some(dec!(15000)));
    assert_eq!(book.best_ask(), Some(dec!(15001)));

    let requests = stub.requests();
    assert_eq!(
        requests.last().unwrap().url,
        url("depth/63632:65284?limit=5")
    );
}

#[tokio::test]
async fn test_fetch_order_book_without_limit_has_no_query() {
    let stub = stub_with_markets();
    stub.set_response(&url("depth/63632:65284"), fixtures::depth());
    let adapter = adapter(Arc::clone(&stub), None);

    let symbol = Symbol::new("ETH", "USD").unwrap();
    adapter.fetch_order_book(&symbol, None).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.last().unwrap().url, url("depth/63632:65284"));
}

#[tokio::test]
async fn test_fetch_balances_sends_basic_auth() {
    let stub = stub_with_markets();
    stub.set_response(&url("balances/"), fixtures::balances());
    let adapter = adapter(
        Arc::clone(&stub),
        Some(ApiCredentials::new("U", "K", "P")),
    );
    assert!(adapter.has_private_access());

    let balances = adapter.fetch_balances().await.unwrap();
    assert!(balances.is_array());

    let requests = stub.requests();
    let balance_request = requests.last().unwrap();
    assert_eq!(balance_request.url, url("balances/"));
    assert_eq!(
        balance_request.headers,
        vec![("Authorization".to_string(), "Basic VS9LOlA=".to_string())]
    );
}

#[tokio::test]
async fn test_fetch_balances_without_credentials_fails_before_send() {
    let stub = stub_with_markets();
    let adapter = adapter(Arc::clone(&stub), None);
    assert!(!adapter.has_private_access());

    let result = adapter.fetch_balances().await;
    assert!(matches!(result, Err(AdapterError::MissingCredentials(_))));

    // Only the market refresh hit the transport
    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| !r.url.contains("balances")));
}

#[tokio::test]
async fn test_transport_failure_surfaces() {
    let stub = stub_with_markets();
    stub.set_fail_next(true);
    let adapter = adapter(stub, None);

    let result = adapter.fetch_markets().await;
    assert!(matches!(result, Err(AdapterError::Transport(_))));
}
