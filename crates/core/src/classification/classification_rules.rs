//! Heuristic rule tables for position classification.
//!
//! The tables are plain data so they can be versioned and tested in
//! isolation; `default_rules()` returns the built-in set.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Lookup tables driving [`classify`](super::classify).
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    /// Stablecoin symbols that the pattern family does not cover.
    pub stablecoin_symbols: HashSet<String>,
    /// Symbol patterns recognized as stablecoins, matched against the
    /// uppercased symbol with trailing `+` markers stripped (USD0++ etc.).
    pub stablecoin_patterns: Vec<Regex>,
    /// Protocols that are perpetual-futures venues.
    pub perp_venues: HashSet<String>,
    /// Derivatives pattern over symbol or display name, e.g. "ETH-PERP".
    pub perp_symbol_pattern: Regex,
    /// Explicit side marker in a position's name ("long"/"short").
    pub perp_side_pattern: Regex,
}

impl ClassificationRules {
    /// True when the symbol reads as a fiat-pegged token. Covers "USD"
    /// itself, wrapped/staked variants (sUSDe), and numeric-suffixed
    /// families (USD0, USD0++).
    pub fn is_stablecoin(&self, symbol: &str) -> bool {
        let normalized = symbol.trim().trim_end_matches('+').to_uppercase();
        if normalized.is_empty() {
            return false;
        }
        self.stablecoin_symbols.contains(&normalized)
            || self
                .stablecoin_patterns
                .iter()
                .any(|p| p.is_match(&normalized))
    }

    /// True when the protocol tag names a perp venue.
    pub fn is_perp_venue(&self, protocol: &str) -> bool {
        self.perp_venues.contains(&protocol.to_lowercase())
    }

    /// True when symbol or name carries an explicit derivatives marker.
    pub fn is_perp_symbol(&self, symbol: &str, name: &str) -> bool {
        self.perp_symbol_pattern.is_match(symbol) || self.perp_symbol_pattern.is_match(name)
    }

    /// True when the display name carries a long/short side marker. Weaker
    /// evidence than [`is_perp_symbol`](Self::is_perp_symbol): the caller
    /// must corroborate it with context before treating the position as a
    /// trade, or names like "Long-term savings" get swept in.
    pub fn has_side_marker(&self, name: &str) -> bool {
        self.perp_side_pattern.is_match(name)
    }
}

static DEFAULT_RULES: Lazy<ClassificationRules> = Lazy::new(|| {
    let stablecoin_symbols: HashSet<String> = [
        "DAI", "FRAX", "LUSD", "GHO", "MIM", "BUSD", "TUSD", "GUSD", "USDP", "FDUSD", "PYUSD",
        "CRVUSD", "EURC", "EURS",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // Matches USD, USDT, USDC, USDE, SUSDE, USDS, USD0, ... but not pair
    // symbols like ETHUSD, which carry the base asset up front.
    let stablecoin_patterns =
        vec![Regex::new(r"^S?USD[A-Z0-9]{0,4}$").expect("invalid stablecoin pattern")];

    let perp_venues: HashSet<String> = [
        "hyperliquid",
        "dydx",
        "gmx",
        "drift",
        "jupiter-perps",
        "vertex",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    ClassificationRules {
        stablecoin_symbols,
        stablecoin_patterns,
        perp_venues,
        perp_symbol_pattern: Regex::new(r"(?i)\b[A-Z0-9]{1,10}-PERP\b")
            .expect("invalid perp pattern"),
        perp_side_pattern: Regex::new(r"(?i)\b(long|short)\b").expect("invalid side pattern"),
    }
});

/// Built-in rule set used when the caller does not inject its own.
pub fn default_rules() -> &'static ClassificationRules {
    &DEFAULT_RULES
}
