//! Sync provider and reconciler traits.

use std::collections::HashSet;

use async_trait::async_trait;

use super::sync_model::SyncBatch;
use crate::accounts::Account;
use crate::errors::Result;
use crate::market_data::MarketDataError;
use crate::positions::Position;

/// A position-fetch collaborator for one account-connection family
/// (on-chain wallets, a centralized exchange, a perp venue, ...).
///
/// The provider picks the accounts it serves out of the supplied list and
/// must report exactly those ids in the returned batch scope.
#[async_trait]
pub trait PositionSyncProviderTrait: Send + Sync {
    /// Stable identifier used in logs and degraded-provider reporting.
    fn provider_id(&self) -> &str;

    /// Fetches fresh positions (and piggy-backed prices) for the accounts
    /// this provider serves.
    async fn fetch_positions(
        &self,
        accounts: &[Account],
    ) -> std::result::Result<SyncBatch, MarketDataError>;
}

/// Contract for the synced-position replace operation.
#[async_trait]
pub trait PositionReconcilerTrait: Send + Sync {
    /// Replaces the positions of exactly the accounts in
    /// `synced_account_ids` with `fresh_positions`, preserving every other
    /// position byte-for-byte. See [`PositionReconciler`] for the
    /// algorithm and its invariants.
    ///
    /// [`PositionReconciler`]: super::PositionReconciler
    async fn set_synced_positions(
        &self,
        synced_account_ids: &HashSet<String>,
        fresh_positions: Vec<Position>,
    ) -> Result<()>;
}
