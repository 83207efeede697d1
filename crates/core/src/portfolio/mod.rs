//! Portfolio module - read-time valuation and summary aggregation.

mod portfolio_model;
mod summary_service;
mod valuation_service;

#[cfg(test)]
mod summary_service_tests;

// Re-export the public interface
pub use portfolio_model::{
    AssetClassBreakdown, CashBreakdown, ConcentrationMetrics, EnrichedPosition, PerpSummary,
    PortfolioSummary, SummaryOptions, TopHolding, VenueBreakdown, VenueSortKey,
};
pub use summary_service::summarize;
pub use valuation_service::{enrich_positions, ValuationContext};
