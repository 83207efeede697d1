use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, ConnectionKind, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Creates a new account with slug-based dedup for manual accounts.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let slug = new_account.effective_slug();
        if let Some(slug) = &slug {
            if let Some(existing) = self.repository.find_by_slug(slug)? {
                debug!(
                    "Account with slug '{}' already exists, returning id {}",
                    slug, existing.id
                );
                return Ok(existing);
            }
        }

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            name: new_account.name,
            is_active: new_account.is_active,
            connection: new_account.connection,
            slug,
            created_at: Utc::now(),
        };
        self.repository.create(account).await
    }

    /// Applies a partial update; the slug is immutable once set.
    async fn update_account(
        &self,
        account_id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>> {
        let Some(mut account) = self.repository.get_by_id(account_id)? else {
            debug!("Update for unknown account {} ignored", account_id);
            return Ok(None);
        };

        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(is_active) = update.is_active {
            account.is_active = is_active;
        }
        if let Some(connection) = update.connection {
            account.connection = connection;
        }
        match (&account.slug, update.slug) {
            (Some(current), Some(requested)) if *current != requested => {
                debug!(
                    "Ignoring slug change '{}' -> '{}' for account {}",
                    current, requested, account_id
                );
            }
            (None, Some(requested)) => account.slug = Some(requested),
            _ => {}
        }

        self.repository.update(account).await
    }

    /// Deletes an account and every position it owns; no-op when missing.
    async fn delete_account(&self, account_id: &str) -> Result<()> {
        let removed = self.repository.delete_cascade(account_id).await?;
        debug!(
            "Deleted account {} and {} owned positions",
            account_id, removed
        );
        Ok(())
    }

    fn get_account(&self, account_id: &str) -> Result<Option<Account>> {
        self.repository.get_by_id(account_id)
    }

    fn list_accounts(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        self.repository.list(is_active_filter)
    }

    fn get_active_accounts(&self) -> Result<Vec<Account>> {
        self.list_accounts(Some(true))
    }

    fn accounts_by_kind(&self, kind: ConnectionKind) -> Result<Vec<Account>> {
        let accounts = self.repository.list(None)?;
        Ok(accounts
            .into_iter()
            .filter(|a| a.connection.kind() == kind)
            .collect())
    }
}
