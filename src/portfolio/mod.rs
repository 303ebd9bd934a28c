pub mod portfolio_calculator;
pub mod portfolio_model;
pub mod portfolio_service;

pub use portfolio_calculator::PortfolioCalculator;
pub use portfolio_model::{HoldingMetrics, HoldingView, PortfolioSummary};
pub use portfolio_service::PortfolioService;

#[cfg(test)]
mod tests;
