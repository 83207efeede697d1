//! Market data module - quote models, provider traits, and the price-merge
//! resolver.

mod market_data_constants;
mod market_data_errors;
mod market_data_model;
mod market_data_service;
mod market_data_traits;
mod price_merge;

#[cfg(test)]
mod price_merge_tests;

// Re-export the public interface
pub use market_data_constants::*;
pub use market_data_errors::MarketDataError;
pub use market_data_model::{PriceMap, PriceQuote, PriceSource};
pub use market_data_service::MarketDataService;
pub use market_data_traits::{
    MarketDataServiceTrait, PriceProviderTrait, QuoteRepositoryTrait,
};
pub use price_merge::merge_price_maps;
