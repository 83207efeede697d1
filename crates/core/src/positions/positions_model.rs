//! Position domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Top-level asset class of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Crypto,
    Equity,
    Metals,
    Cash,
    #[default]
    Other,
}

/// A single holding or liability record.
///
/// `account_id == None` marks a standalone manual position. Such positions
/// are never touched by any account-scoped sync operation; only an explicit
/// user removal deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Asset class declared by the originating source.
    pub asset_class: AssetClass,
    /// Per-position override; wins over the declared class when present.
    pub class_override: Option<AssetClass>,
    pub quantity: Decimal,
    /// Borrowed/short exposure flag set upstream, independent of sign.
    pub is_debt: bool,
    pub cost_basis: Option<Decimal>,
    pub acquired_at: Option<NaiveDate>,
    /// Owning account, absent for standalone manual positions.
    pub account_id: Option<String>,
    // Provenance tags
    pub chain: Option<String>,
    pub protocol: Option<String>,
    pub detail: Option<String>,
    /// Provider-specific price lookup key (e.g. a coin-id), when the
    /// symbol alone is not the pricing identity.
    pub price_key: Option<String>,
    /// User-pinned price; overrides every provider quote.
    pub custom_price: Option<Decimal>,
    /// Unlock timestamp for vesting positions.
    pub unlock_at: Option<DateTime<Utc>>,
}

impl Position {
    /// Asset class after applying the per-position override.
    pub fn effective_class(&self) -> AssetClass {
        self.class_override.unwrap_or(self.asset_class)
    }
}

/// Input model for a user-entered position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition {
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub quantity: Decimal,
    #[serde(default)]
    pub is_debt: bool,
    pub cost_basis: Option<Decimal>,
    pub acquired_at: Option<NaiveDate>,
    pub account_id: Option<String>,
    pub chain: Option<String>,
    pub protocol: Option<String>,
    pub detail: Option<String>,
    pub price_key: Option<String>,
    pub custom_price: Option<Decimal>,
    pub unlock_at: Option<DateTime<Utc>>,
}

impl NewPosition {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored position with a fresh id.
    pub fn into_position(self) -> Position {
        Position {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: self.symbol,
            name: self.name,
            asset_class: self.asset_class,
            class_override: None,
            quantity: self.quantity,
            is_debt: self.is_debt,
            cost_basis: self.cost_basis,
            acquired_at: self.acquired_at,
            account_id: self.account_id,
            chain: self.chain,
            protocol: self.protocol,
            detail: self.detail,
            price_key: self.price_key,
            custom_price: self.custom_price,
            unlock_at: self.unlock_at,
        }
    }
}

/// Input model for partially updating a position. `None` leaves the field
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    pub name: Option<String>,
    pub quantity: Option<Decimal>,
    pub is_debt: Option<bool>,
    pub class_override: Option<AssetClass>,
    pub cost_basis: Option<Decimal>,
    pub acquired_at: Option<NaiveDate>,
    pub detail: Option<String>,
    pub custom_price: Option<Decimal>,
}
