//! Asset/Market Resolver
//!
//! Joins the two independently-fetched venue collections (assets,
//! markets) by integer asset id into canonical markets. Pure function
//! of its inputs plus the injected clock reading.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use coinflex_domain::{Market, Symbol};

use crate::error::{AdapterError, AdapterResult};
use crate::ports::CurrencyCodec;
use crate::raw::{RawAsset, RawMarket};

// =============================================================================
// Prepared Asset Index
// =============================================================================

/// Asset fields copied into the resolution index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedAsset {
    /// Venue currency name
    pub name: String,
    /// Spot variant name, preferred for currency-code derivation
    pub spot_name: Option<String>,
    /// Spot variant id
    pub spot_id: Option<String>,
    /// Decimal scale of amounts in this asset
    pub scale: Option<u32>,
}

/// Mapping from asset id to its copied fields.
///
/// Built once per markets refresh, used only during resolution.
pub type PreparedAssetIndex = HashMap<i64, PreparedAsset>;

/// Build the asset index with a single pass over `assets`.
///
/// Duplicate ids are not an error: the last record wins.
pub fn prepare_assets(assets: &[RawAsset]) -> PreparedAssetIndex {
    let mut index = PreparedAssetIndex::with_capacity(assets.len());
    for asset in assets {
        index.insert(
            asset.id,
            PreparedAsset {
                name: asset.name.clone(),
                spot_name: asset.spot_name.clone(),
                spot_id: asset.spot_id.clone(),
                scale: asset.scale,
            },
        );
    }
    index
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve raw markets against raw assets into canonical markets.
///
/// Output order matches the input `markets` order; markets mapping to
/// the same symbol are passed through unchanged (the venue may list
/// several). Activity derives from the expiry alone: a market is
/// inactive only when `expires` is present and `now_millis` is past it.
///
/// # Errors
///
/// `AdapterError::UnknownAsset` when a market references an asset id
/// absent from `assets`; no currency code is ever fabricated.
pub fn resolve_markets(
    assets: &[RawAsset],
    markets: &[RawMarket],
    now_millis: i64,
    codec: &dyn CurrencyCodec,
) -> AdapterResult<Vec<Market>> {
    let prepared = prepare_assets(assets);

    // Deliberate verbatim echo of both collections plus the index,
    // attached to every resolved market for downstream debugging.
    let info = serde_json::json!({
        "assets": assets,
        "markets": markets,
        "preparedAssets": prepared,
    });

    let mut result = Vec::with_capacity(markets.len());
    for market in markets {
        let base = currency_code(&prepared, market, market.base, codec)?;
        let quote = currency_code(&prepared, market, market.counter, codec)?;
        let symbol = Symbol::new(base, quote)?;

        let active = match market.expires {
            Some(expires) => now_millis <= expires,
            None => true,
        };

        result.push(Market {
            id: market.name.clone(),
            symbol,
            base_id: market.base,
            quote_id: market.counter,
            active,
            info: info.clone(),
        });
    }

    debug!(market_count = result.len(), "resolved markets");
    Ok(result)
}

/// Derive the canonical currency code for one side of a market.
///
/// Prefers the asset's `spot_name` when present, falls back to `name`,
/// then canonicalizes through the injected codec.
fn currency_code(
    index: &PreparedAssetIndex,
    market: &RawMarket,
    asset_id: i64,
    codec: &dyn CurrencyCodec,
) -> AdapterResult<String> {
    let asset = index.get(&asset_id).ok_or_else(|| AdapterError::UnknownAsset {
        market: market.name.clone(),
        asset_id,
    })?;
    let venue_name = asset.spot_name.as_deref().unwrap_or(&asset.name);
    Ok(codec.canonical_code(venue_name))
}

// =============================================================================
// Tests
// =============================================================================
