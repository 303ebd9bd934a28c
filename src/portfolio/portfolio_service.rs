use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::holdings::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::holdings::holdings_traits::HoldingRepositoryTrait;

use super::portfolio_calculator::PortfolioCalculator;
use super::portfolio_model::{HoldingView, PortfolioSummary};

/// Caller-facing service for portfolio queries and holding mutations.
///
/// Stateless over the injected repository; every summary is computed
/// from a single store read.
pub struct PortfolioService {
    repository: Arc<dyn HoldingRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance
    pub fn new(repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Lists all holdings enriched with derived metrics
    pub fn list_holdings(&self) -> Result<Vec<HoldingView>> {
        let holdings = self.repository.list()?;
        Ok(holdings.iter().map(PortfolioCalculator::holding_view).collect())
    }

    /// Retrieves a single holding enriched with derived metrics
    pub fn get_holding(&self, holding_id: &str) -> Result<HoldingView> {
        let holding = self.repository.get_by_id(holding_id)?;
        Ok(PortfolioCalculator::holding_view(&holding))
    }

    /// Computes the portfolio summary from one store snapshot
    pub fn get_summary(&self) -> Result<PortfolioSummary> {
        let holdings = self.repository.list()?;
        debug!("Summarizing {} holdings", holdings.len());
        Ok(PortfolioCalculator::summarize(&holdings))
    }

    /// Validates and persists a new holding; nothing is written when the
    /// input is invalid
    pub fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        Ok(self.repository.create(new_holding)?)
    }

    /// Validates and applies a full-field update to an existing holding
    pub fn update_holding(&self, holding_update: HoldingUpdate) -> Result<Holding> {
        holding_update.validate()?;
        Ok(self.repository.update(holding_update)?)
    }

    /// Records a new price snapshot for a holding
    pub fn update_price(&self, holding_id: &str, price: Decimal) -> Result<Holding> {
        if price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Price must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(self.repository.update_price(holding_id, price)?)
    }

    /// Deletes a holding by its ID
    pub fn delete_holding(&self, holding_id: &str) -> Result<()> {
        self.repository.delete(holding_id)?;
        Ok(())
    }
}
