//! Read-time price-merge resolver.

use std::collections::hash_map::Entry;

use super::market_data_model::PriceMap;

/// Merges partial price maps left-to-right into a unified view.
///
/// Later sources win on price value. The 24h-change fields are back-filled
/// from whichever source most recently supplied a non-zero change for that
/// key, even when its price was overridden by a later, more authoritative
/// source: in practice the wallet-aggregation provider has the best price
/// for tokens it knows, while the general market-data provider has the
/// reliable 24h change, and the merged entry combines both.
///
/// Keys are provider-specific lookup identifiers; no rekeying or symbol
/// normalization happens here. Assets known only to earlier sources pass
/// through unchanged, so long-tail tokens keep whatever price exists.
///
/// An unavailable source is simply an absent/empty map, never an error.
pub fn merge_price_maps(sources: &[PriceMap]) -> PriceMap {
    let mut merged = PriceMap::new();
    for source in sources {
        for (key, quote) in source {
            match merged.entry(key.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(quote.clone());
                }
                Entry::Occupied(mut slot) => {
                    let mut next = quote.clone();
                    let prev = slot.get();
                    if !next.has_change() && prev.has_change() {
                        next.change24h = prev.change24h;
                        next.change_percent24h = prev.change_percent24h;
                    }
                    slot.insert(next);
                }
            }
        }
    }
    merged
}
