//! Portfolio summary aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::portfolio_model::{
    AssetClassBreakdown, CashBreakdown, ConcentrationMetrics, EnrichedPosition, PerpSummary,
    PortfolioSummary, SummaryOptions, TopHolding, VenueBreakdown, VenueSortKey,
};
use crate::classification::SubCategory;
use crate::constants::CONCENTRATION_BUCKET;
use crate::positions::AssetClass;

/// Folds an enriched position list into the summary consumed by the
/// presentation layer. Pure over its inputs.
pub fn summarize(enriched: &[EnrichedPosition], options: &SummaryOptions) -> PortfolioSummary {
    let total_value: Decimal = enriched.iter().map(|e| e.value).sum();

    PortfolioSummary {
        total_value,
        by_asset_class: asset_class_breakdown(enriched),
        top_holdings: top_holdings(enriched, options.top_n),
        cash: cash_breakdown(enriched, options.include_stablecoins_in_cash),
        perps: perp_summary(enriched, options.venue_sort),
        concentration: concentration(enriched),
    }
}

fn asset_class_breakdown(enriched: &[EnrichedPosition]) -> Vec<AssetClassBreakdown> {
    let mut by_class: HashMap<AssetClass, Decimal> = HashMap::new();
    for entry in enriched {
        *by_class
            .entry(entry.classification.asset_class)
            .or_default() += entry.value;
    }
    let mut breakdown: Vec<AssetClassBreakdown> = by_class
        .into_iter()
        .map(|(asset_class, value)| AssetClassBreakdown { asset_class, value })
        .collect();
    breakdown.sort_by(|a, b| b.value.cmp(&a.value));
    breakdown
}

fn top_holdings(enriched: &[EnrichedPosition], top_n: usize) -> Vec<TopHolding> {
    let mut sorted: Vec<&EnrichedPosition> = enriched.iter().collect();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted
        .into_iter()
        .take(top_n)
        .map(|entry| TopHolding {
            symbol: entry.position.symbol.clone(),
            name: entry.position.name.clone(),
            value: entry.value,
            allocation_pct: entry.allocation_pct,
        })
        .collect()
}

fn cash_breakdown(enriched: &[EnrichedPosition], include_stablecoins: bool) -> CashBreakdown {
    let mut fiat = Decimal::ZERO;
    let mut stablecoins = Decimal::ZERO;
    for entry in enriched {
        if entry.classification.asset_class == AssetClass::Cash {
            fiat += entry.value;
        } else if entry.classification.sub_category == SubCategory::Stablecoins {
            stablecoins += entry.value;
        }
    }
    let total = if include_stablecoins {
        fiat + stablecoins
    } else {
        fiat
    };
    CashBreakdown {
        fiat,
        stablecoins,
        include_stablecoins,
        total,
    }
}

fn perp_summary(enriched: &[EnrichedPosition], sort: VenueSortKey) -> PerpSummary {
    let mut collateral = Decimal::ZERO;
    let mut long_notional = Decimal::ZERO;
    let mut short_notional = Decimal::ZERO;

    // Venues are discovered from margin deposits and perp trades; spot
    // balances held at the same venue are folded into its breakdown.
    let mut venues: HashMap<String, VenueBreakdown> = HashMap::new();
    for entry in enriched {
        let is_perp_row = matches!(
            entry.classification.sub_category,
            SubCategory::MarginDeposit | SubCategory::PerpTrade
        );
        if !is_perp_row {
            continue;
        }
        let Some(venue) = entry.position.protocol.clone() else {
            continue;
        };
        venues.entry(venue.clone()).or_insert(VenueBreakdown {
            venue,
            margin: Decimal::ZERO,
            spot_value: Decimal::ZERO,
            long_notional: Decimal::ZERO,
            short_notional: Decimal::ZERO,
            net_value: Decimal::ZERO,
            position_count: 0,
        });
    }

    for entry in enriched {
        match entry.classification.sub_category {
            SubCategory::MarginDeposit => {
                collateral += entry.value;
                if let Some(venue) = venue_slot(&mut venues, &entry.position.protocol) {
                    venue.margin += entry.value;
                }
            }
            SubCategory::PerpTrade => {
                let notional = entry.value.abs();
                if entry.classification.is_debt {
                    short_notional += notional;
                } else {
                    long_notional += notional;
                }
                if let Some(venue) = venue_slot(&mut venues, &entry.position.protocol) {
                    if entry.classification.is_debt {
                        venue.short_notional += notional;
                    } else {
                        venue.long_notional += notional;
                    }
                    venue.position_count += 1;
                }
            }
            _ => {
                if let Some(venue) = venue_slot(&mut venues, &entry.position.protocol) {
                    venue.spot_value += entry.value;
                }
            }
        }
    }

    let gross_notional = long_notional + short_notional;
    let net_notional = long_notional - short_notional;
    let utilization_pct = if collateral.is_zero() {
        Decimal::ZERO
    } else {
        gross_notional / collateral * Decimal::ONE_HUNDRED
    };

    let mut venues: Vec<VenueBreakdown> = venues
        .into_values()
        .map(|mut v| {
            v.net_value = v.margin + v.spot_value + v.long_notional - v.short_notional;
            v
        })
        .collect();
    venues.sort_by(|a, b| match sort {
        VenueSortKey::NetValue => b.net_value.cmp(&a.net_value),
        VenueSortKey::Margin => b.margin.cmp(&a.margin),
        VenueSortKey::GrossNotional => (b.long_notional + b.short_notional)
            .cmp(&(a.long_notional + a.short_notional)),
        VenueSortKey::PositionCount => b.position_count.cmp(&a.position_count),
    });

    PerpSummary {
        collateral,
        gross_notional,
        net_notional,
        utilization_pct,
        venues,
    }
}

fn venue_slot<'a>(
    venues: &'a mut HashMap<String, VenueBreakdown>,
    protocol: &Option<String>,
) -> Option<&'a mut VenueBreakdown> {
    protocol.as_ref().and_then(|p| venues.get_mut(p))
}

fn concentration(enriched: &[EnrichedPosition]) -> ConcentrationMetrics {
    let mut abs_values: Vec<Decimal> = enriched.iter().map(|e| e.value.abs()).collect();
    abs_values.sort_by(|a, b| b.cmp(a));
    let total_abs: Decimal = abs_values.iter().copied().sum();

    if total_abs.is_zero() {
        return ConcentrationMetrics {
            top_position_pct: Decimal::ZERO,
            top5_pct: Decimal::ZERO,
        };
    }

    let top_position_pct = abs_values[0] / total_abs * Decimal::ONE_HUNDRED;
    let top5: Decimal = abs_values.iter().take(CONCENTRATION_BUCKET).copied().sum();
    ConcentrationMetrics {
        top_position_pct,
        top5_pct: top5 / total_abs * Decimal::ONE_HUNDRED,
    }
}
