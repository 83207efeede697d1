//! Sync domain models.

use crate::market_data::{PriceMap, PriceSource};
use crate::positions::Position;

/// Result of one position-sync provider fetch.
///
/// `account_ids` is the exact sync scope: the accounts whose positions
/// were actually fetched. `positions` is trusted as the complete set for
/// those accounts - an empty list means they hold nothing.
#[derive(Debug, Clone, Default)]
pub struct SyncBatch {
    pub account_ids: Vec<String>,
    pub positions: Vec<Position>,
    /// Prices the fetcher learned along the way (e.g. wallet-aggregator
    /// token prices), keyed by provider-specific lookup key.
    pub prices: PriceMap,
    /// Source rank for the piggy-backed prices.
    pub price_source: PriceSource,
}

/// Per-provider decision on how a fetch failure affects the refresh.
///
/// This makes the failure policy an explicit, auditable table instead of
/// scattered catch-and-log call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and treat the provider's contribution as empty; data already
    /// in the store for its scope is kept untouched.
    ContributeNothing,
    /// Abort the whole refresh cycle, leaving last-known-good state.
    Abort,
}

/// Outcome of one refresh invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Refresh ran to commit. `degraded` lists providers whose failure was
    /// tolerated as "(provider id, error)" pairs - empty means every
    /// provider contributed.
    Completed { degraded: Vec<(String, String)> },
    /// A refresh was already in flight; this invocation was dropped.
    Skipped,
}
