//! Tests for valuation and summary aggregation.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::classification::default_rules;
    use crate::fx::FxRateMap;
    use crate::market_data::{PriceMap, PriceQuote};
    use crate::portfolio::{
        enrich_positions, summarize, SummaryOptions, ValuationContext, VenueSortKey,
    };
    use crate::positions::{AssetClass, Position};

    fn position(symbol: &str, class: AssetClass, quantity: Decimal) -> Position {
        Position {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            asset_class: class,
            class_override: None,
            quantity,
            is_debt: false,
            cost_basis: None,
            acquired_at: None,
            account_id: None,
            chain: None,
            protocol: None,
            detail: None,
            price_key: None,
            custom_price: None,
            unlock_at: None,
        }
    }

    fn quote(symbol: &str, price: Decimal) -> PriceQuote {
        PriceQuote {
            symbol: symbol.to_string(),
            price,
            change24h: dec!(1),
            change_percent24h: dec!(0.5),
            last_updated: Utc::now(),
        }
    }

    fn context<'a>(prices: &'a PriceMap, fx_rates: &'a FxRateMap) -> ValuationContext<'a> {
        ValuationContext {
            prices,
            fx_rates,
            base_currency: "USD",
            rules: default_rules(),
        }
    }

    // ==================== Valuation ====================

    #[test]
    fn test_price_key_wins_over_symbol() {
        let mut prices = PriceMap::new();
        prices.insert("maple-finance".to_string(), quote("SYRUP", dec!(0.5)));
        prices.insert("SYRUP".to_string(), quote("SYRUP", dec!(0.4)));
        let fx = FxRateMap::new();

        let mut p = position("SYRUP", AssetClass::Crypto, dec!(10));
        p.price_key = Some("maple-finance".to_string());
        let enriched = enrich_positions(&[p], &context(&prices, &fx));
        assert_eq!(enriched[0].price, Some(dec!(0.5)));
        assert_eq!(enriched[0].value, dec!(5));
    }

    #[test]
    fn test_custom_price_overrides_quotes() {
        let mut prices = PriceMap::new();
        prices.insert("ETH".to_string(), quote("ETH", dec!(3000)));
        let fx = FxRateMap::new();

        let mut p = position("ETH", AssetClass::Crypto, dec!(2));
        p.custom_price = Some(dec!(3100));
        let enriched = enrich_positions(&[p], &context(&prices, &fx));
        assert!(enriched[0].has_custom_price);
        assert_eq!(enriched[0].value, dec!(6200));
    }

    #[test]
    fn test_debt_negates_value_regardless_of_sign() {
        let mut prices = PriceMap::new();
        prices.insert("ETH".to_string(), quote("ETH", dec!(3000)));
        let fx = FxRateMap::new();

        let mut p = position("ETH", AssetClass::Crypto, dec!(1));
        p.is_debt = true;
        let enriched = enrich_positions(&[p], &context(&prices, &fx));
        assert_eq!(enriched[0].value, dec!(-3000));
    }

    #[test]
    fn test_fiat_cash_uses_fx_rate() {
        let prices = PriceMap::new();
        let mut fx = FxRateMap::new();
        fx.insert("EUR".to_string(), dec!(1.1));

        let eur = position("EUR", AssetClass::Cash, dec!(100));
        let usd = position("USD", AssetClass::Cash, dec!(50));
        let enriched = enrich_positions(&[eur, usd], &context(&prices, &fx));
        assert_eq!(enriched[0].value, dec!(110.0));
        assert_eq!(enriched[1].value, dec!(50));
    }

    #[test]
    fn test_unpriced_position_values_zero() {
        let prices = PriceMap::new();
        let fx = FxRateMap::new();
        let enriched = enrich_positions(
            &[position("XYZ", AssetClass::Other, dec!(5))],
            &context(&prices, &fx),
        );
        assert_eq!(enriched[0].price, None);
        assert_eq!(enriched[0].value, Decimal::ZERO);
    }

    // ==================== Summary ====================

    fn enriched_fixture() -> Vec<crate::portfolio::EnrichedPosition> {
        let mut prices = PriceMap::new();
        prices.insert("ETH".to_string(), quote("ETH", dec!(3000)));
        prices.insert("USDC".to_string(), quote("USDC", dec!(1)));
        prices.insert("ETH-PERP".to_string(), quote("ETH-PERP", dec!(3000)));
        prices.insert("SOL-PERP".to_string(), quote("SOL-PERP", dec!(200)));
        let fx = FxRateMap::new();

        let spot = position("ETH", AssetClass::Crypto, dec!(1));

        let mut margin = position("USDC", AssetClass::Crypto, dec!(1000));
        margin.protocol = Some("hyperliquid".to_string());

        let mut long = position("ETH-PERP", AssetClass::Crypto, dec!(1));
        long.protocol = Some("hyperliquid".to_string());

        let mut short = position("SOL-PERP", AssetClass::Crypto, dec!(5));
        short.protocol = Some("dydx".to_string());
        short.is_debt = true;

        let cash = position("USD", AssetClass::Cash, dec!(500));

        let mut stable = position("USDT", AssetClass::Crypto, dec!(200));
        stable.price_key = Some("USDC".to_string()); // priced at 1

        enrich_positions(&[spot, margin, long, short, cash, stable], &context(&prices, &fx))
    }

    #[test]
    fn test_total_nets_debts() {
        let summary = summarize(&enriched_fixture(), &SummaryOptions::default());
        // 3000 + 1000 + 3000 - 1000 + 500 + 200
        assert_eq!(summary.total_value, dec!(6700));
    }

    #[test]
    fn test_cash_split_toggle() {
        let enriched = enriched_fixture();
        let with = summarize(&enriched, &SummaryOptions::default());
        assert_eq!(with.cash.fiat, dec!(500));
        assert_eq!(with.cash.stablecoins, dec!(200));
        assert_eq!(with.cash.total, dec!(700));

        let without = summarize(
            &enriched,
            &SummaryOptions {
                include_stablecoins_in_cash: false,
                ..Default::default()
            },
        );
        assert_eq!(without.cash.total, dec!(500));
    }

    #[test]
    fn test_perp_metrics() {
        let summary = summarize(&enriched_fixture(), &SummaryOptions::default());
        let perps = &summary.perps;
        assert_eq!(perps.collateral, dec!(1000));
        assert_eq!(perps.gross_notional, dec!(4000));
        assert_eq!(perps.net_notional, dec!(2000));
        assert_eq!(perps.utilization_pct, dec!(400));
    }

    #[test]
    fn test_venues_sorted_by_net_value_desc() {
        let summary = summarize(&enriched_fixture(), &SummaryOptions::default());
        let venues = &summary.perps.venues;
        assert_eq!(venues.len(), 2);
        // hyperliquid: 1000 margin + 3000 long = 4000; dydx: -1000 short.
        assert_eq!(venues[0].venue, "hyperliquid");
        assert_eq!(venues[0].net_value, dec!(4000));
        assert_eq!(venues[0].position_count, 1);
        assert_eq!(venues[1].venue, "dydx");
        assert_eq!(venues[1].net_value, dec!(-1000));
    }

    #[test]
    fn test_venue_sort_by_position_count() {
        let summary = summarize(
            &enriched_fixture(),
            &SummaryOptions {
                venue_sort: VenueSortKey::PositionCount,
                ..Default::default()
            },
        );
        assert_eq!(summary.perps.venues[0].position_count, 1);
    }

    #[test]
    fn test_single_position_concentration_is_total() {
        let mut prices = PriceMap::new();
        prices.insert("ETH".to_string(), quote("ETH", dec!(3000)));
        let fx = FxRateMap::new();
        let enriched = enrich_positions(
            &[position("ETH", AssetClass::Crypto, dec!(1))],
            &context(&prices, &fx),
        );
        let summary = summarize(&enriched, &SummaryOptions::default());
        assert_eq!(summary.concentration.top_position_pct, dec!(100));
        assert_eq!(summary.concentration.top5_pct, dec!(100));
    }

    #[test]
    fn test_zero_total_concentration_is_zero_not_nan() {
        let prices = PriceMap::new();
        let fx = FxRateMap::new();
        let enriched = enrich_positions(
            &[position("XYZ", AssetClass::Other, dec!(5))],
            &context(&prices, &fx),
        );
        let summary = summarize(&enriched, &SummaryOptions::default());
        assert_eq!(summary.concentration.top_position_pct, Decimal::ZERO);
        assert_eq!(summary.concentration.top5_pct, Decimal::ZERO);
        assert_eq!(summary.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_empty_portfolio_is_safe() {
        let summary = summarize(&[], &SummaryOptions::default());
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert!(summary.top_holdings.is_empty());
        assert_eq!(summary.concentration.top5_pct, Decimal::ZERO);
    }

    #[test]
    fn test_top_holdings_respects_n_and_order() {
        let summary = summarize(
            &enriched_fixture(),
            &SummaryOptions {
                top_n: 2,
                ..Default::default()
            },
        );
        assert_eq!(summary.top_holdings.len(), 2);
        assert!(summary.top_holdings[0].value >= summary.top_holdings[1].value);
    }

    #[test]
    fn test_short_counts_toward_concentration() {
        let mut prices = PriceMap::new();
        prices.insert("ETH-PERP".to_string(), quote("ETH-PERP", dec!(3000)));
        prices.insert("USDC".to_string(), quote("USDC", dec!(1)));
        let fx = FxRateMap::new();

        let mut short = position("ETH-PERP", AssetClass::Crypto, dec!(2));
        short.is_debt = true;
        let small = position("USDC", AssetClass::Crypto, dec!(100));
        let enriched = enrich_positions(&[short, small], &context(&prices, &fx));
        let summary = summarize(&enriched, &SummaryOptions::default());
        // |−6000| of |−6000|+|100|
        assert!(summary.concentration.top_position_pct > dec!(98));
    }
}
