//! Market data domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market_data_constants::{
    PRICE_SOURCE_EXCHANGE, PRICE_SOURCE_MANUAL, PRICE_SOURCE_MARKET_DATA,
    PRICE_SOURCE_WALLET_AGGREGATOR,
};

/// A single quote from one source, keyed externally by a provider-specific
/// lookup key (not always the symbol - e.g. a coin-id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Decimal,
    /// Absolute 24h change; zero means "not supplied" for merge purposes.
    pub change24h: Decimal,
    pub change_percent24h: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl PriceQuote {
    /// True when this quote carries no usable 24h-change information.
    pub fn has_change(&self) -> bool {
        !self.change24h.is_zero() || !self.change_percent24h.is_zero()
    }
}

/// Partial price map as supplied by one source.
pub type PriceMap = HashMap<String, PriceQuote>;

/// Where a price map came from. Priority decides merge order: higher
/// priority sources win on price value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceSource {
    /// General market-data provider; most reliable 24h change.
    #[default]
    MarketData,
    /// Centralized exchange tickers.
    Exchange,
    /// Wallet-aggregation provider; most accurate price for tokens it knows.
    WalletAggregator,
    /// User-pinned quotes.
    Manual,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::MarketData => PRICE_SOURCE_MARKET_DATA,
            PriceSource::Exchange => PRICE_SOURCE_EXCHANGE,
            PriceSource::WalletAggregator => PRICE_SOURCE_WALLET_AGGREGATOR,
            PriceSource::Manual => PRICE_SOURCE_MANUAL,
        }
    }

    /// Merge rank; maps ascending over [`merge_price_maps`] input order.
    pub fn priority(&self) -> u8 {
        match self {
            PriceSource::MarketData => 0,
            PriceSource::Exchange => 1,
            PriceSource::WalletAggregator => 2,
            PriceSource::Manual => 3,
        }
    }
}

impl From<PriceSource> for String {
    fn from(source: PriceSource) -> Self {
        source.as_str().to_string()
    }
}

impl From<&str> for PriceSource {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            PRICE_SOURCE_EXCHANGE => PriceSource::Exchange,
            PRICE_SOURCE_WALLET_AGGREGATOR => PriceSource::WalletAggregator,
            PRICE_SOURCE_MANUAL => PriceSource::Manual,
            _ => PriceSource::MarketData,
        }
    }
}
