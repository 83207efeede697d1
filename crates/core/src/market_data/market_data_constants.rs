//! String identifiers for the price sources.

pub const PRICE_SOURCE_MARKET_DATA: &str = "MARKET_DATA";
pub const PRICE_SOURCE_EXCHANGE: &str = "EXCHANGE";
pub const PRICE_SOURCE_WALLET_AGGREGATOR: &str = "WALLET_AGGREGATOR";
pub const PRICE_SOURCE_MANUAL: &str = "MANUAL";
