use log::debug;
use std::sync::Arc;

use super::positions_model::{NewPosition, Position, PositionUpdate};
use super::positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
use crate::errors::Result;

/// Service for managing positions.
pub struct PositionService {
    repository: Arc<dyn PositionRepositoryTrait>,
}

impl PositionService {
    /// Creates a new PositionService instance.
    pub fn new(repository: Arc<dyn PositionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PositionServiceTrait for PositionService {
    async fn add_position(&self, new_position: NewPosition) -> Result<Position> {
        new_position.validate()?;
        self.repository.create(new_position.into_position()).await
    }

    async fn update_position(
        &self,
        position_id: &str,
        update: PositionUpdate,
    ) -> Result<Option<Position>> {
        let Some(mut position) = self.repository.get_by_id(position_id)? else {
            debug!("Update for unknown position {} ignored", position_id);
            return Ok(None);
        };

        if let Some(name) = update.name {
            position.name = name;
        }
        if let Some(quantity) = update.quantity {
            position.quantity = quantity;
        }
        if let Some(is_debt) = update.is_debt {
            position.is_debt = is_debt;
        }
        if let Some(class_override) = update.class_override {
            position.class_override = Some(class_override);
        }
        if let Some(cost_basis) = update.cost_basis {
            position.cost_basis = Some(cost_basis);
        }
        if let Some(acquired_at) = update.acquired_at {
            position.acquired_at = Some(acquired_at);
        }
        if let Some(detail) = update.detail {
            position.detail = Some(detail);
        }
        if let Some(custom_price) = update.custom_price {
            position.custom_price = Some(custom_price);
        }

        self.repository.update(position).await
    }

    async fn delete_position(&self, position_id: &str) -> Result<()> {
        let removed = self.repository.delete(position_id).await?;
        if removed == 0 {
            debug!("Delete for unknown position {} ignored", position_id);
        }
        Ok(())
    }

    fn get_position(&self, position_id: &str) -> Result<Option<Position>> {
        self.repository.get_by_id(position_id)
    }

    fn list_positions(&self) -> Result<Vec<Position>> {
        self.repository.list()
    }
}
