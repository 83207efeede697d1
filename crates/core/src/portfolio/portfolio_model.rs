//! Portfolio view models. All of these are derived at read time and never
//! persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::constants::DEFAULT_TOP_HOLDINGS;
use crate::positions::{AssetClass, Position};

/// A position joined with its resolved price and derived value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPosition {
    pub position: Position,
    pub classification: Classification,
    /// Resolved current price, when any source knows one.
    pub price: Option<Decimal>,
    pub change24h: Option<Decimal>,
    pub change_percent24h: Option<Decimal>,
    /// `quantity × price`, negated for debt/short positions.
    pub value: Decimal,
    /// Share of the portfolio by absolute value, in percent.
    pub allocation_pct: Decimal,
    /// True when the price came from a user-pinned override.
    pub has_custom_price: bool,
}

/// Full portfolio summary exposed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Assets minus debts.
    pub total_value: Decimal,
    pub by_asset_class: Vec<AssetClassBreakdown>,
    pub top_holdings: Vec<TopHolding>,
    pub cash: CashBreakdown,
    pub perps: PerpSummary,
    pub concentration: ConcentrationMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassBreakdown {
    pub asset_class: AssetClass,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHolding {
    pub symbol: String,
    pub name: String,
    pub value: Decimal,
    pub allocation_pct: Decimal,
}

/// Fiat vs stablecoin split of cash-like value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBreakdown {
    pub fiat: Decimal,
    pub stablecoins: Decimal,
    /// Whether `total` includes stablecoins.
    pub include_stablecoins: bool,
    pub total: Decimal,
}

/// Perpetual-futures exposure metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpSummary {
    /// Margin deposits across all venues.
    pub collateral: Decimal,
    /// Sum of absolute long + short notional.
    pub gross_notional: Decimal,
    /// Long minus short notional.
    pub net_notional: Decimal,
    /// Gross notional ÷ collateral, in percent (a leverage-style measure
    /// of how hard the posted collateral is working); zero when no
    /// collateral.
    pub utilization_pct: Decimal,
    pub venues: Vec<VenueBreakdown>,
}

/// Per-venue perp aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBreakdown {
    pub venue: String,
    pub margin: Decimal,
    pub spot_value: Decimal,
    pub long_notional: Decimal,
    pub short_notional: Decimal,
    /// margin + spot + (long − short).
    pub net_value: Decimal,
    /// Number of open perp trades at this venue.
    pub position_count: usize,
}

/// Sort key for the per-venue breakdown; always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VenueSortKey {
    #[default]
    NetValue,
    Margin,
    GrossNotional,
    PositionCount,
}

/// Concentration over absolute position values, so a large short counts
/// the same as a large long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationMetrics {
    /// Share of the single largest position, in percent.
    pub top_position_pct: Decimal,
    /// Share of the five largest positions, in percent.
    pub top5_pct: Decimal,
}

/// Caller knobs for [`summarize`](super::summarize).
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub top_n: usize,
    pub include_stablecoins_in_cash: bool,
    pub venue_sort: VenueSortKey,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_HOLDINGS,
            include_stablecoins_in_cash: true,
            venue_sort: VenueSortKey::NetValue,
        }
    }
}
