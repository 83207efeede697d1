//! Tests for the price-merge resolver.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::market_data::{merge_price_maps, PriceMap, PriceQuote};

    fn quote(symbol: &str, price: Decimal, change: Decimal, change_pct: Decimal) -> PriceQuote {
        PriceQuote {
            symbol: symbol.to_string(),
            price,
            change24h: change,
            change_percent24h: change_pct,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_later_price_wins_change_survives() {
        // Market data first, wallet aggregator second: the wallet price is
        // authoritative, the market-data 24h change must survive.
        let mut market_data = PriceMap::new();
        market_data.insert("eth".to_string(), quote("ETH", dec!(3050), dec!(30), dec!(1.0)));
        let mut wallet = PriceMap::new();
        wallet.insert("eth".to_string(), quote("ETH", dec!(3100), dec!(0), dec!(0)));

        let merged = merge_price_maps(&[market_data, wallet]);
        let eth = &merged["eth"];
        assert_eq!(eth.price, dec!(3100));
        assert_eq!(eth.change24h, dec!(30));
        assert_eq!(eth.change_percent24h, dec!(1.0));
    }

    #[test]
    fn test_later_nonzero_change_overrides() {
        let mut first = PriceMap::new();
        first.insert("btc".to_string(), quote("BTC", dec!(64000), dec!(100), dec!(0.2)));
        let mut second = PriceMap::new();
        second.insert("btc".to_string(), quote("BTC", dec!(64100), dec!(-250), dec!(-0.4)));

        let merged = merge_price_maps(&[first, second]);
        let btc = &merged["btc"];
        assert_eq!(btc.price, dec!(64100));
        assert_eq!(btc.change24h, dec!(-250));
    }

    #[test]
    fn test_long_tail_fallback_passes_through() {
        // SYRUP is priced only by the market-data source under its own
        // lookup key; the wallet source knows nothing about it.
        let mut market_data = PriceMap::new();
        market_data.insert(
            "maple-finance".to_string(),
            quote("SYRUP", dec!(0.42), dec!(0.01), dec!(2.4)),
        );
        let wallet = PriceMap::new();

        let merged = merge_price_maps(&[market_data, wallet]);
        assert_eq!(merged["maple-finance"].price, dec!(0.42));
        assert_eq!(merged["maple-finance"].symbol, "SYRUP");
    }

    #[test]
    fn test_no_rekeying_across_sources() {
        // The same logical asset under two keys stays two entries.
        let mut market_data = PriceMap::new();
        market_data.insert("ethereum".to_string(), quote("ETH", dec!(3050), dec!(30), dec!(1.0)));
        let mut wallet = PriceMap::new();
        wallet.insert("eth".to_string(), quote("ETH", dec!(3100), dec!(0), dec!(0)));

        let merged = merge_price_maps(&[market_data, wallet]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["ethereum"].price, dec!(3050));
        assert_eq!(merged["eth"].price, dec!(3100));
    }

    #[test]
    fn test_empty_sources_are_harmless() {
        let merged = merge_price_maps(&[PriceMap::new(), PriceMap::new()]);
        assert!(merged.is_empty());
        assert!(merge_price_maps(&[]).is_empty());
    }
}
