use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

use super::holdings_errors::{HoldingError, Result};

/// Closed set of asset classes a holding can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Stock,
    #[serde(rename = "ETF")]
    Etf,
    Crypto,
    Bond,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::Crypto => "Crypto",
            AssetType::Bond => "Bond",
        }
    }
}

impl TryFrom<&str> for AssetType {
    type Error = HoldingError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "Stock" => Ok(AssetType::Stock),
            "ETF" => Ok(AssetType::Etf),
            "Crypto" => Ok(AssetType::Crypto),
            "Bond" => Ok(AssetType::Bond),
            other => Err(HoldingError::InvalidData(format!(
                "Unknown asset type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a single investment position.
///
/// The store owns the canonical record; any value handed out is a
/// snapshot valid only for the computation it was read for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub symbol: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
    #[serde(with = "decimal_serde_option")]
    pub current_price: Option<Decimal>,
    pub last_price_update: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new holding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub symbol: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
    #[serde(default, with = "decimal_serde_option")]
    pub current_price: Option<Decimal>,
}

impl NewHolding {
    /// Validates the new holding data
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(HoldingError::InvalidData(
                "Symbol cannot be empty".to_string(),
            ));
        }
        if self.asset_name.trim().is_empty() {
            return Err(HoldingError::InvalidData(
                "Asset name cannot be empty".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(HoldingError::InvalidData(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        if self.purchase_price <= Decimal::ZERO {
            return Err(HoldingError::InvalidData(
                "Purchase price must be greater than zero".to_string(),
            ));
        }
        if let Some(price) = self.current_price {
            if price <= Decimal::ZERO {
                return Err(HoldingError::InvalidData(
                    "Current price must be greater than zero".to_string(),
                ));
            }
        }
        if self.purchase_date > Utc::now().date_naive() {
            return Err(HoldingError::InvalidData(
                "Purchase date cannot be in the future".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating the descriptive fields of an existing holding.
///
/// Price state (`current_price`, `last_price_update`) is only touched by
/// the dedicated price-update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub id: String,
    pub symbol: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
}

impl HoldingUpdate {
    /// Validates the holding update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(HoldingError::InvalidData(
                "Holding ID is required for updates".to_string(),
            ));
        }
        if self.symbol.trim().is_empty() {
            return Err(HoldingError::InvalidData(
                "Symbol cannot be empty".to_string(),
            ));
        }
        if self.asset_name.trim().is_empty() {
            return Err(HoldingError::InvalidData(
                "Asset name cannot be empty".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(HoldingError::InvalidData(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        if self.purchase_price <= Decimal::ZERO {
            return Err(HoldingError::InvalidData(
                "Purchase price must be greater than zero".to_string(),
            ));
        }
        if self.purchase_date > Utc::now().date_naive() {
            return Err(HoldingError::InvalidData(
                "Purchase date cannot be in the future".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for holdings
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub symbol: String,
    pub asset_name: String,
    pub asset_type: String,
    pub quantity: String,
    pub purchase_price: String,
    pub purchase_date: NaiveDate,
    pub current_price: Option<String>,
    pub last_price_update: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NewHolding> for HoldingDB {
    fn from(domain: NewHolding) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            symbol: domain.symbol.trim().to_uppercase(),
            asset_name: domain.asset_name.trim().to_string(),
            asset_type: domain.asset_type.as_str().to_string(),
            quantity: domain.quantity.to_string(),
            purchase_price: domain.purchase_price.to_string(),
            purchase_date: domain.purchase_date,
            current_price: domain.current_price.map(|p| p.to_string()),
            last_price_update: domain.current_price.map(|_| now),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = HoldingError;

    fn try_from(db: HoldingDB) -> Result<Holding> {
        let current_price = db
            .current_price
            .as_deref()
            .map(Decimal::from_str)
            .transpose()?;

        Ok(Holding {
            id: db.id,
            symbol: db.symbol,
            asset_name: db.asset_name,
            asset_type: AssetType::try_from(db.asset_type.as_str())?,
            quantity: Decimal::from_str(&db.quantity)?,
            purchase_price: Decimal::from_str(&db.purchase_price)?,
            purchase_date: db.purchase_date,
            current_price,
            last_price_update: db.last_price_update,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
