//! Account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// How an account is connected to its data source.
///
/// A closed sum type so every consumer pattern-matches exhaustively;
/// adding a connection type is a compile-time exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AccountConnection {
    /// On-chain wallet address tracked across one or more chains.
    #[serde(rename_all = "camelCase")]
    Wallet {
        address: String,
        chains: Vec<String>,
        /// Perp venues enabled for this wallet (empty = none).
        perp_venues: Vec<String>,
    },
    /// Centralized exchange account reached through its API.
    #[serde(rename_all = "camelCase")]
    Exchange {
        exchange_id: String,
        api_key: String,
        api_secret: String,
    },
    /// Manually maintained account with no external identity.
    Manual,
}

impl AccountConnection {
    pub fn kind(&self) -> ConnectionKind {
        match self {
            AccountConnection::Wallet { .. } => ConnectionKind::Wallet,
            AccountConnection::Exchange { .. } => ConnectionKind::Exchange,
            AccountConnection::Manual => ConnectionKind::Manual,
        }
    }
}

/// Discriminant of [`AccountConnection`], used for derived partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionKind {
    Wallet,
    Exchange,
    Manual,
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub connection: AccountConnection,
    /// Dedup key for manual/cash-like accounts. Immutable once set.
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub connection: AccountConnection,
    /// Explicit dedup key. Manual accounts derive one from the name
    /// when this is not supplied.
    pub slug: Option<String>,
    pub is_active: bool,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        match &self.connection {
            AccountConnection::Wallet { address, .. } => {
                if address.trim().is_empty() {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "address".to_string(),
                    )));
                }
            }
            AccountConnection::Exchange { exchange_id, .. } => {
                if exchange_id.trim().is_empty() {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "exchangeId".to_string(),
                    )));
                }
            }
            AccountConnection::Manual => {}
        }
        Ok(())
    }

    /// Dedup key this account should carry: the explicit one when supplied,
    /// otherwise derived from the display name for manual accounts.
    /// Wallet and exchange accounts are identified by their connection,
    /// never by slug.
    pub fn effective_slug(&self) -> Option<String> {
        match self.connection.kind() {
            ConnectionKind::Manual => self
                .slug
                .clone()
                .or_else(|| Some(slugify(&self.name)))
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }
}

/// Input model for partially updating an existing account.
///
/// `None` fields are left untouched. A `slug` value is silently ignored
/// when the account already carries one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub connection: Option<AccountConnection>,
    pub slug: Option<String>,
}

/// Derives the dedup key for a display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims leading/trailing dashes. Names differing only in
/// case or punctuation therefore collide.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}
