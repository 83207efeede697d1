//! Pure classification over a position plus a rule table.

use super::classification_model::{Classification, SubCategory};
use super::classification_rules::ClassificationRules;
use crate::positions::{AssetClass, Position};

/// Classifies a raw position into asset class, sub-category, and debt sign.
///
/// Pure: no store access, no side effects. The upstream `is_debt` flag is
/// preserved untouched; sign inference never happens here. Zero-amount
/// positions are not filtered - that is a caller concern.
pub fn classify(position: &Position, rules: &ClassificationRules) -> Classification {
    let asset_class = position.effective_class();
    let at_perp_venue = position
        .protocol
        .as_deref()
        .is_some_and(|protocol| rules.is_perp_venue(protocol));

    // A "long"/"short" side marker alone is ambiguous ("Long-term
    // savings"); it only marks a trade when the position sits at a perp
    // venue or is a crypto asset.
    let is_perp_trade = rules.is_perp_symbol(&position.symbol, &position.name)
        || (rules.has_side_marker(&position.name)
            && (at_perp_venue || asset_class == AssetClass::Crypto));

    let sub_category = if is_perp_trade {
        SubCategory::PerpTrade
    } else if rules.is_stablecoin(&position.symbol) && asset_class != AssetClass::Cash {
        match &position.protocol {
            // A stablecoin parked at a perp venue is posted collateral,
            // not a spot holding.
            Some(protocol) if rules.is_perp_venue(protocol) => SubCategory::MarginDeposit,
            _ => SubCategory::Stablecoins,
        }
    } else {
        SubCategory::Spot
    };

    Classification {
        asset_class,
        sub_category,
        is_debt: position.is_debt,
    }
}
