pub mod holdings_errors;
pub mod holdings_model;
pub mod holdings_repository;
pub mod holdings_traits;

pub use holdings_errors::HoldingError;
pub use holdings_model::{AssetType, Holding, HoldingUpdate, NewHolding};
pub use holdings_repository::HoldingRepository;
pub use holdings_traits::HoldingRepositoryTrait;
