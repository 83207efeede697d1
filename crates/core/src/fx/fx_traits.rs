//! Fx provider trait.

use async_trait::async_trait;

use super::FxRateMap;
use crate::market_data::MarketDataError;

/// A foreign-exchange-rate collaborator.
#[async_trait]
pub trait FxRateProviderTrait: Send + Sync {
    /// Fetches the latest rate-into-base for every supported currency.
    async fn fetch_rates(&self) -> std::result::Result<FxRateMap, MarketDataError>;
}
