//! Classification domain models.

use serde::{Deserialize, Serialize};

use crate::positions::AssetClass;

/// Sub-category of a holding within its asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SubCategory {
    /// Fiat-pegged crypto asset, reported as cash-equivalent.
    Stablecoins,
    /// Stablecoin balance posted as collateral at a perp venue.
    MarginDeposit,
    /// An actual long/short perpetual-futures trade.
    PerpTrade,
    /// Plain holding, including spot balances at a perp venue.
    #[default]
    Spot,
}

/// Result of classifying a raw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub asset_class: AssetClass,
    pub sub_category: SubCategory,
    /// Upstream debt/short flag, passed through untouched.
    pub is_debt: bool,
}
