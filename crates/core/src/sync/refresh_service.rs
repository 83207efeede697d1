//! Refresh orchestrator.
//!
//! One refresh fans out to every registered provider concurrently, then
//! commits prices and performs exactly one reconciler call per fetched
//! sync scope. A process-wide in-flight flag drops (not queues) refresh
//! requests that arrive while one is running.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error, warn};

use super::sync_model::{FailurePolicy, RefreshOutcome, SyncBatch};
use super::sync_traits::{PositionReconcilerTrait, PositionSyncProviderTrait};
use crate::accounts::AccountServiceTrait;
use crate::errors::Result;
use crate::fx::FxRateProviderTrait;
use crate::market_data::{PriceMap, PriceProviderTrait, PriceSource, QuoteRepositoryTrait};

/// Clears the in-flight flag when the refresh ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Orchestrates a full refresh cycle across providers.
pub struct RefreshService {
    in_flight: AtomicBool,
    account_service: Arc<dyn AccountServiceTrait>,
    reconciler: Arc<dyn PositionReconcilerTrait>,
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
    position_providers: Vec<(Arc<dyn PositionSyncProviderTrait>, FailurePolicy)>,
    price_providers: Vec<(Arc<dyn PriceProviderTrait>, FailurePolicy)>,
    /// Fx failures are always tolerated: stale rates beat no refresh.
    fx_provider: Option<Arc<dyn FxRateProviderTrait>>,
}

impl RefreshService {
    /// Creates a new RefreshService instance.
    pub fn new(
        account_service: Arc<dyn AccountServiceTrait>,
        reconciler: Arc<dyn PositionReconcilerTrait>,
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
        position_providers: Vec<(Arc<dyn PositionSyncProviderTrait>, FailurePolicy)>,
        price_providers: Vec<(Arc<dyn PriceProviderTrait>, FailurePolicy)>,
        fx_provider: Option<Arc<dyn FxRateProviderTrait>>,
    ) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            account_service,
            reconciler,
            quote_repository,
            position_providers,
            price_providers,
            fx_provider,
        }
    }

    /// True while a refresh cycle is running.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Runs one refresh cycle.
    ///
    /// A second invocation while one is in flight returns
    /// [`RefreshOutcome::Skipped`] without touching the store. The
    /// in-flight flag is cleared by a drop guard, so an errored or
    /// panicked refresh can never wedge future refreshes. There is no
    /// cancellation of a cycle once started.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Refresh already in flight, dropping request");
            return Ok(RefreshOutcome::Skipped);
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.refresh_inner().await
    }

    async fn refresh_inner(&self) -> Result<RefreshOutcome> {
        let accounts = self.account_service.get_active_accounts()?;
        debug!("Refreshing {} active account(s)", accounts.len());

        // Fan out every provider call concurrently; no ordering dependency
        // between them. Timeouts belong to the HTTP collaborators.
        let position_futures = self
            .position_providers
            .iter()
            .map(|(provider, _)| provider.fetch_positions(&accounts));
        let price_futures = self
            .price_providers
            .iter()
            .map(|(provider, _)| provider.fetch_prices());
        let fx_future = async {
            match &self.fx_provider {
                Some(provider) => Some(provider.fetch_rates().await),
                None => None,
            }
        };

        let (position_results, price_results, fx_result) = futures::join!(
            join_all(position_futures),
            join_all(price_futures),
            fx_future
        );

        // Apply the failure-policy table before committing anything, so an
        // aborted cycle leaves the store at last-known-good state.
        let mut degraded: Vec<(String, String)> = Vec::new();

        let mut batches: Vec<SyncBatch> = Vec::new();
        for ((provider, policy), result) in self.position_providers.iter().zip(position_results) {
            match result {
                Ok(batch) => batches.push(batch),
                Err(err) => match policy {
                    FailurePolicy::Abort => {
                        error!(
                            "Position provider '{}' failed, aborting refresh: {}",
                            provider.provider_id(),
                            err
                        );
                        return Err(err.into());
                    }
                    FailurePolicy::ContributeNothing => {
                        warn!(
                            "Position provider '{}' failed, keeping its last-known data: {}",
                            provider.provider_id(),
                            err
                        );
                        degraded.push((provider.provider_id().to_string(), err.to_string()));
                    }
                },
            }
        }

        let mut price_updates: Vec<(PriceSource, PriceMap)> = Vec::new();
        for ((provider, policy), result) in self.price_providers.iter().zip(price_results) {
            match result {
                Ok(map) => price_updates.push((provider.source(), map)),
                Err(err) => match policy {
                    FailurePolicy::Abort => {
                        error!(
                            "Price provider '{}' failed, aborting refresh: {}",
                            provider.source().as_str(),
                            err
                        );
                        return Err(err.into());
                    }
                    FailurePolicy::ContributeNothing => {
                        warn!(
                            "Price provider '{}' failed, contributing nothing: {}",
                            provider.source().as_str(),
                            err
                        );
                        degraded.push((provider.source().as_str().to_string(), err.to_string()));
                    }
                },
            }
        }

        // Commit phase.
        for (source, map) in price_updates {
            self.quote_repository.store_price_map(source, map)?;
        }

        for batch in batches {
            let SyncBatch {
                account_ids,
                positions,
                prices,
                price_source,
            } = batch;
            if !prices.is_empty() {
                self.quote_repository.store_price_map(price_source, prices)?;
            }
            let scope: HashSet<String> = account_ids.into_iter().collect();
            self.reconciler.set_synced_positions(&scope, positions).await?;
        }

        match fx_result {
            Some(Ok(rates)) => self.quote_repository.store_fx_rates(rates)?,
            Some(Err(err)) => {
                warn!("Fx provider failed, keeping previous rates: {}", err);
                degraded.push(("fx".to_string(), err.to_string()));
            }
            None => {}
        }

        Ok(RefreshOutcome::Completed { degraded })
    }
}
