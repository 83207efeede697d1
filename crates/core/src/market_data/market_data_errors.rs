//! Market data error types.

use thiserror::Error;

/// Errors surfaced by price, position, and fx providers.
///
/// A provider failure is a value, not an exception: the refresh
/// orchestrator decides per provider whether it contributes nothing or
/// aborts the cycle.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider could not be reached or returned a transport error.
    #[error("Provider '{provider}' unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    /// The provider answered with a payload the fetcher could not use.
    #[error("Invalid response from provider '{provider}': {reason}")]
    InvalidResponse { provider: String, reason: String },

    /// No usable data for the requested scope.
    #[error("No data: {0}")]
    NoData(String),
}
