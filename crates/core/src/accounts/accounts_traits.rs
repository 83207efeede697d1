//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, ConnectionKind, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Persists a fully-built account record.
    async fn create(&self, account: Account) -> Result<Account>;

    /// Overwrites an existing account record.
    ///
    /// Returns `None` when no account with that id exists.
    async fn update(&self, account: Account) -> Result<Option<Account>>;

    /// Deletes the account and every position it owns in one commit.
    ///
    /// Returns the number of deleted positions. Deleting a nonexistent
    /// account removes nothing and returns 0.
    async fn delete_cascade(&self, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Option<Account>>;

    /// Finds an account carrying the given dedup key.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Account>>;

    /// Lists accounts, optionally filtered by active status.
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business logic (dedup, slug immutability,
/// cascade semantics) and coordinates with the repository.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account, or returns the existing one when the dedup
    /// key already exists (merge-on-conflict, never an error).
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Applies a partial update. Updating a nonexistent account is a no-op
    /// and returns `None`.
    async fn update_account(
        &self,
        account_id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>>;

    /// Deletes an account and cascades to its positions. Deleting a
    /// nonexistent account is a no-op.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Option<Account>>;

    /// Lists accounts with an optional active-status filter.
    fn list_accounts(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>>;

    /// Gets only active accounts.
    fn get_active_accounts(&self) -> Result<Vec<Account>>;

    /// Derived partition of the account set by connection kind.
    fn accounts_by_kind(&self, kind: ConnectionKind) -> Result<Vec<Account>>;
}
