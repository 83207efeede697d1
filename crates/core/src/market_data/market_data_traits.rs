//! Market data provider and repository traits.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{PriceMap, PriceSource};
use crate::errors::Result;

/// A price source collaborator (market-data API, exchange tickers, ...).
///
/// Implementations own their HTTP details; the engine only sees the
/// resulting partial map or a typed failure.
#[async_trait]
pub trait PriceProviderTrait: Send + Sync {
    /// Which source this provider feeds, and therefore its merge rank.
    fn source(&self) -> PriceSource;

    /// Fetches the provider's current partial price map.
    async fn fetch_prices(&self) -> std::result::Result<PriceMap, MarketDataError>;
}

/// Storage contract for per-source price maps and fx rates.
///
/// Maps are stored per source and read back in ascending priority order;
/// the merged view is computed at read time and never persisted.
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Replaces the stored map for one source.
    fn store_price_map(&self, source: PriceSource, map: PriceMap) -> Result<()>;

    /// All stored maps, ordered by ascending source priority.
    fn price_maps(&self) -> Result<Vec<PriceMap>>;

    /// Replaces the stored fx rates (currency code -> rate to base).
    fn store_fx_rates(&self, rates: HashMap<String, Decimal>) -> Result<()>;

    /// Latest fx rates.
    fn fx_rates(&self) -> Result<HashMap<String, Decimal>>;
}

/// Read surface over the quote store.
pub trait MarketDataServiceTrait: Send + Sync {
    /// The unified price view across all stored sources.
    fn merged_prices(&self) -> Result<PriceMap>;

    /// Latest fx rates (currency code -> rate to base).
    fn fx_rates(&self) -> Result<HashMap<String, Decimal>>;
}
