//! Shared constants for the Netfolio engine.

/// Currency every portfolio value is reported in unless configured otherwise.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Default number of entries in the top-holdings list.
pub const DEFAULT_TOP_HOLDINGS: usize = 5;

/// Number of positions considered by the top-5 concentration metric.
pub const CONCENTRATION_BUCKET: usize = 5;
