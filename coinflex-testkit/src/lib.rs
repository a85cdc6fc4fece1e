//! Test fixtures for the CoinFlex adapter.
//!
//! Canned venue payloads shared by connector tests.

#![warn(clippy::all)]

pub mod fixtures;

pub use fixtures::{
    assets, balances, depth, duplicate_symbol_markets, duplicate_symbol_tickers, markets, tickers,
    NOW_MILLIS,
};
