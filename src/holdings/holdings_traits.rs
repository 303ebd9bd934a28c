use rust_decimal::Decimal;

use super::holdings_errors::Result;
use super::holdings_model::{Holding, HoldingUpdate, NewHolding};

/// Trait defining the contract for holding storage operations.
///
/// Any backing medium qualifies provided single-record mutations are
/// atomic; the portfolio service only ever depends on this contract.
pub trait HoldingRepositoryTrait: Send + Sync {
    fn create(&self, new_holding: NewHolding) -> Result<Holding>;
    fn get_by_id(&self, holding_id: &str) -> Result<Holding>;
    fn list(&self) -> Result<Vec<Holding>>;
    fn update(&self, holding_update: HoldingUpdate) -> Result<Holding>;
    fn update_price(&self, holding_id: &str, price: Decimal) -> Result<Holding>;
    fn delete(&self, holding_id: &str) -> Result<usize>;
}
