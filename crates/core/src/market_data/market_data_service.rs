use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::market_data_traits::{MarketDataServiceTrait, QuoteRepositoryTrait};
use super::price_merge::merge_price_maps;
use crate::errors::Result;
use crate::market_data::PriceMap;

/// Service exposing the merged price view over the quote store.
pub struct MarketDataService {
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
}

impl MarketDataService {
    /// Creates a new MarketDataService instance.
    pub fn new(quote_repository: Arc<dyn QuoteRepositoryTrait>) -> Self {
        Self { quote_repository }
    }
}

impl MarketDataServiceTrait for MarketDataService {
    fn merged_prices(&self) -> Result<PriceMap> {
        let maps = self.quote_repository.price_maps()?;
        Ok(merge_price_maps(&maps))
    }

    fn fx_rates(&self) -> Result<HashMap<String, Decimal>> {
        self.quote_repository.fx_rates()
    }
}
