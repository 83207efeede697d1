//! Netfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the position reconciliation and price-merge engine
//! for Netfolio. It is storage-agnostic and defines repository traits that
//! are implemented by the `store-memory` crate (or any other store).

pub mod accounts;
pub mod classification;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod market_data;
pub mod portfolio;
pub mod positions;
pub mod sync;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
