//! Read-time valuation: joins positions with merged prices.

use rust_decimal::Decimal;

use super::portfolio_model::EnrichedPosition;
use crate::classification::{classify, ClassificationRules};
use crate::fx::{convert_to_base, FxRateMap};
use crate::market_data::PriceMap;
use crate::positions::{AssetClass, Position};

/// Everything valuation needs besides the positions themselves.
pub struct ValuationContext<'a> {
    /// Merged price view, keyed by provider-specific lookup keys.
    pub prices: &'a PriceMap,
    /// Currency code -> rate into base, for fiat cash positions.
    pub fx_rates: &'a FxRateMap,
    pub base_currency: &'a str,
    pub rules: &'a ClassificationRules,
}

/// Builds the enriched view of a position list.
///
/// Price resolution per position, first hit wins:
/// 1. user-pinned custom price,
/// 2. fiat fx rate for cash positions (symbol is the currency code),
/// 3. merged quote under the classifier-assigned lookup key,
/// 4. merged quote under the raw symbol.
///
/// Value is `quantity × price`, negated for debt/short positions so they
/// reduce net worth regardless of the quantity sign. Allocation is the
/// share of the portfolio's absolute value.
pub fn enrich_positions(positions: &[Position], ctx: &ValuationContext) -> Vec<EnrichedPosition> {
    let mut enriched: Vec<EnrichedPosition> = positions
        .iter()
        .map(|position| enrich_one(position, ctx))
        .collect();

    let total_abs: Decimal = enriched.iter().map(|e| e.value.abs()).sum();
    if !total_abs.is_zero() {
        for entry in enriched.iter_mut() {
            entry.allocation_pct = entry.value.abs() / total_abs * Decimal::ONE_HUNDRED;
        }
    }

    enriched
}

fn enrich_one(position: &Position, ctx: &ValuationContext) -> EnrichedPosition {
    let classification = classify(position, ctx.rules);

    let mut change24h = None;
    let mut change_percent24h = None;
    let mut has_custom_price = false;

    let price: Option<Decimal> = if let Some(custom) = position.custom_price {
        has_custom_price = true;
        Some(custom)
    } else if classification.asset_class == AssetClass::Cash {
        convert_to_base(Decimal::ONE, &position.symbol, ctx.base_currency, ctx.fx_rates)
    } else {
        let quote = position
            .price_key
            .as_deref()
            .and_then(|key| ctx.prices.get(key))
            .or_else(|| ctx.prices.get(&position.symbol));
        if let Some(quote) = quote {
            change24h = Some(quote.change24h);
            change_percent24h = Some(quote.change_percent24h);
        }
        quote.map(|q| q.price)
    };

    let gross = price.map_or(Decimal::ZERO, |p| position.quantity * p);
    let value = if position.is_debt { -gross.abs() } else { gross };

    EnrichedPosition {
        position: position.clone(),
        classification,
        price,
        change24h,
        change_percent24h,
        value,
        allocation_pct: Decimal::ZERO,
        has_custom_price,
    }
}
