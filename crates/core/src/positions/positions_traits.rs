//! Position repository and service traits.

use async_trait::async_trait;

use super::positions_model::{NewPosition, Position, PositionUpdate};
use crate::errors::Result;

/// Trait defining the contract for Position repository operations.
#[async_trait]
pub trait PositionRepositoryTrait: Send + Sync {
    /// Persists a fully-built position record.
    async fn create(&self, position: Position) -> Result<Position>;

    /// Overwrites an existing position record.
    ///
    /// Returns `None` when no position with that id exists.
    async fn update(&self, position: Position) -> Result<Option<Position>>;

    /// Deletes a position by id; returns the number of deleted records.
    async fn delete(&self, position_id: &str) -> Result<usize>;

    /// Replaces the whole position collection in one commit.
    ///
    /// This is the only write the synced-position reconciler performs.
    async fn replace_all(&self, positions: Vec<Position>) -> Result<()>;

    /// Retrieves a position by its ID.
    fn get_by_id(&self, position_id: &str) -> Result<Option<Position>>;

    /// Lists all positions in store order.
    fn list(&self) -> Result<Vec<Position>>;
}

/// Trait defining the contract for Position service operations.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    /// Records a user-entered position.
    async fn add_position(&self, new_position: NewPosition) -> Result<Position>;

    /// Applies a partial update. Updating a nonexistent position is a no-op
    /// and returns `None`.
    async fn update_position(
        &self,
        position_id: &str,
        update: PositionUpdate,
    ) -> Result<Option<Position>>;

    /// Removes a position; removing a nonexistent one is a no-op.
    async fn delete_position(&self, position_id: &str) -> Result<()>;

    /// Retrieves a position by ID.
    fn get_position(&self, position_id: &str) -> Result<Option<Position>>;

    /// Lists all positions.
    fn list_positions(&self) -> Result<Vec<Position>>;
}
