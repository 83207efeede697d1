//! Foreign-exchange rates - inbound collaborator interface and helpers.
//!
//! Rates are a flat map of currency code to rate-into-base, refreshed as a
//! whole by the orchestrator. Historical rates are out of scope.

mod fx_traits;

pub use fx_traits::FxRateProviderTrait;

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Currency code -> multiplicative rate into the base currency.
pub type FxRateMap = HashMap<String, Decimal>;

/// Converts an amount into the base currency.
///
/// The base currency itself always converts at 1; unknown currencies
/// return `None` so the caller can decide how to report the gap.
pub fn convert_to_base(
    amount: Decimal,
    currency: &str,
    base_currency: &str,
    rates: &FxRateMap,
) -> Option<Decimal> {
    if currency.eq_ignore_ascii_case(base_currency) {
        return Some(amount);
    }
    rates.get(&currency.to_uppercase()).map(|rate| amount * rate)
}
