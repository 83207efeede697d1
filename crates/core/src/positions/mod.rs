//! Positions module - domain models, services, and traits.

mod positions_model;
mod positions_service;
mod positions_traits;

// Re-export the public interface
pub use positions_model::{AssetClass, NewPosition, Position, PositionUpdate};
pub use positions_service::PositionService;
pub use positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
