//! In-memory store for the Netfolio engine.
//!
//! Implements the core repository traits over a single `RwLock`-guarded
//! state struct, so every mutation - including the account cascade delete
//! and the reconciler's whole-collection replace - is one atomic state
//! transition with no intermediate inconsistent read. The product swaps
//! this for its document store; the contract is identical.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use netfolio_core::accounts::{Account, AccountRepositoryTrait};
use netfolio_core::errors::{Result, StoreError};
use netfolio_core::market_data::{PriceMap, PriceSource, QuoteRepositoryTrait};
use netfolio_core::positions::{Position, PositionRepositoryTrait};

#[derive(Default)]
struct StoreState {
    accounts: Vec<Account>,
    positions: Vec<Position>,
    /// Per-source maps keyed by merge priority, read back ascending.
    price_maps: HashMap<u8, PriceMap>,
    fx_rates: HashMap<String, Decimal>,
}

/// Whole-collection in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()).into())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()).into())
    }
}

#[async_trait]
impl AccountRepositoryTrait for MemoryStore {
    async fn create(&self, account: Account) -> Result<Account> {
        let mut state = self.write()?;
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Option<Account>> {
        let mut state = self.write()?;
        match state.accounts.iter_mut().find(|a| a.id == account.id) {
            Some(slot) => {
                *slot = account.clone();
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn delete_cascade(&self, account_id: &str) -> Result<usize> {
        // One write guard covers both collections: there is no observable
        // state where the account is gone but its positions remain.
        let mut state = self.write()?;
        let accounts_before = state.accounts.len();
        state.accounts.retain(|a| a.id != account_id);
        if state.accounts.len() == accounts_before {
            // Unknown account: leave the store untouched, even when
            // dangling position references carry this id.
            return Ok(0);
        }
        let before = state.positions.len();
        state
            .positions
            .retain(|p| p.account_id.as_deref() != Some(account_id));
        Ok(before - state.positions.len())
    }

    fn get_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Account>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        let state = self.read()?;
        Ok(state
            .accounts
            .iter()
            .filter(|a| is_active_filter.map_or(true, |active| a.is_active == active))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PositionRepositoryTrait for MemoryStore {
    async fn create(&self, position: Position) -> Result<Position> {
        let mut state = self.write()?;
        state.positions.push(position.clone());
        Ok(position)
    }

    async fn update(&self, position: Position) -> Result<Option<Position>> {
        let mut state = self.write()?;
        match state.positions.iter_mut().find(|p| p.id == position.id) {
            Some(slot) => {
                *slot = position.clone();
                Ok(Some(position))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, position_id: &str) -> Result<usize> {
        let mut state = self.write()?;
        let before = state.positions.len();
        state.positions.retain(|p| p.id != position_id);
        Ok(before - state.positions.len())
    }

    async fn replace_all(&self, positions: Vec<Position>) -> Result<()> {
        self.write()?.positions = positions;
        Ok(())
    }

    fn get_by_id(&self, position_id: &str) -> Result<Option<Position>> {
        Ok(self
            .read()?
            .positions
            .iter()
            .find(|p| p.id == position_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Position>> {
        Ok(self.read()?.positions.clone())
    }
}

impl QuoteRepositoryTrait for MemoryStore {
    fn store_price_map(&self, source: PriceSource, map: PriceMap) -> Result<()> {
        self.write()?.price_maps.insert(source.priority(), map);
        Ok(())
    }

    fn price_maps(&self) -> Result<Vec<PriceMap>> {
        let state = self.read()?;
        let mut keyed: Vec<(&u8, &PriceMap)> = state.price_maps.iter().collect();
        keyed.sort_by_key(|(priority, _)| **priority);
        Ok(keyed.into_iter().map(|(_, map)| map.clone()).collect())
    }

    fn store_fx_rates(&self, rates: HashMap<String, Decimal>) -> Result<()> {
        self.write()?.fx_rates = rates;
        Ok(())
    }

    fn fx_rates(&self) -> Result<HashMap<String, Decimal>> {
        Ok(self.read()?.fx_rates.clone())
    }
}
