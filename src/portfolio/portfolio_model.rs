use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::holdings_model::{AssetType, Holding};
use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

/// Derived valuation metrics for a single holding.
///
/// `invested_value` is always present; the other metrics exist only when
/// the holding carries a current price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetrics {
    #[serde(with = "decimal_serde")]
    pub invested_value: Decimal,
    #[serde(with = "decimal_serde_option")]
    pub current_value: Option<Decimal>,
    #[serde(with = "decimal_serde_option")]
    pub gain_loss: Option<Decimal>,
    #[serde(with = "decimal_serde_option")]
    pub gain_loss_percent: Option<Decimal>,
}

/// Holding snapshot enriched with derived metrics, as handed to
/// presentation. Holds value copies only, no reference into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
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
    #[serde(with = "decimal_serde")]
    pub invested_value: Decimal,
    #[serde(with = "decimal_serde_option")]
    pub current_value: Option<Decimal>,
    #[serde(with = "decimal_serde_option")]
    pub gain_loss: Option<Decimal>,
    #[serde(with = "decimal_serde_option")]
    pub gain_loss_percent: Option<Decimal>,
}

impl HoldingView {
    /// Combines a holding snapshot with its derived metrics
    pub fn new(holding: &Holding, metrics: HoldingMetrics) -> Self {
        Self {
            id: holding.id.clone(),
            symbol: holding.symbol.clone(),
            asset_name: holding.asset_name.clone(),
            asset_type: holding.asset_type,
            quantity: holding.quantity,
            purchase_price: holding.purchase_price,
            purchase_date: holding.purchase_date,
            current_price: holding.current_price,
            last_price_update: holding.last_price_update,
            invested_value: metrics.invested_value,
            current_value: metrics.current_value,
            gain_loss: metrics.gain_loss,
            gain_loss_percent: metrics.gain_loss_percent,
        }
    }
}

/// Portfolio-wide aggregate view, computed fresh on every query and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(with = "decimal_serde")]
    pub total_invested: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_gain_loss: Decimal,
    #[serde(with = "decimal_serde_option")]
    pub total_gain_loss_percent: Option<Decimal>,
    pub holdings_count: usize,
    pub holdings_with_prices: usize,
    pub top_holdings: Vec<HoldingView>,
    pub best_performer: Option<HoldingView>,
    pub worst_performer: Option<HoldingView>,
}
