//! Sync module - the synced-position reconciler and the refresh
//! orchestrator that drives it.

mod reconciler;
mod refresh_service;
mod sync_model;
mod sync_traits;


// Re-export the public interface
pub use reconciler::PositionReconciler;
pub use refresh_service::RefreshService;
pub use sync_model::{FailurePolicy, RefreshOutcome, SyncBatch};
pub use sync_traits::{PositionReconcilerTrait, PositionSyncProviderTrait};
