//! Synced-position reconciler.
//!
//! The highest-risk operation in the engine: a bug here silently deletes a
//! user's financial records, so the algorithm is deliberately small.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::sync_traits::PositionReconcilerTrait;
use crate::errors::Result;
use crate::positions::{Position, PositionRepositoryTrait};

/// Replaces account-scoped position sets without data loss.
pub struct PositionReconciler {
    position_repository: Arc<dyn PositionRepositoryTrait>,
}

impl PositionReconciler {
    /// Creates a new PositionReconciler instance.
    pub fn new(position_repository: Arc<dyn PositionRepositoryTrait>) -> Self {
        Self {
            position_repository,
        }
    }
}

#[async_trait]
impl PositionReconcilerTrait for PositionReconciler {
    /// Replaces the position sets of the synced accounts.
    ///
    /// 1. Partition the current store: positions whose account is not in
    ///    the scope (including unowned/manual positions) are preserved in
    ///    their relative order; the rest are replaced.
    /// 2. New state = preserved ++ fresh, committed as one
    ///    whole-collection replace.
    ///
    /// `fresh_positions` is trusted complete for the scope: an empty list
    /// with a non-empty scope means "these accounts now hold nothing".
    /// Callers must not invoke this at all for a failed fetch. The scope
    /// is trusted to match the actually-fetched accounts; a mismatch is a
    /// caller bug this function cannot detect.
    async fn set_synced_positions(
        &self,
        synced_account_ids: &HashSet<String>,
        fresh_positions: Vec<Position>,
    ) -> Result<()> {
        let current = self.position_repository.list()?;
        let before = current.len();

        let mut next: Vec<Position> = current
            .into_iter()
            .filter(|position| match &position.account_id {
                Some(account_id) => !synced_account_ids.contains(account_id),
                // Unowned positions are permanently manual.
                None => true,
            })
            .collect();
        let preserved = next.len();
        next.extend(fresh_positions);

        debug!(
            "Reconciling {} synced account(s): {} preserved, {} replaced, {} fresh",
            synced_account_ids.len(),
            preserved,
            before - preserved,
            next.len() - preserved
        );

        self.position_repository.replace_all(next).await
    }
}
