use rust_decimal::Decimal;

use crate::constants::TOP_HOLDINGS_LIMIT;
use crate::holdings::holdings_model::Holding;

use super::portfolio_model::{HoldingMetrics, HoldingView, PortfolioSummary};

/// Pure derivation of portfolio metrics from a snapshot of holdings.
///
/// The calculator owns no state and performs no I/O; callers hand it the
/// holdings read in a single store query and get value copies back.
pub struct PortfolioCalculator;

impl PortfolioCalculator {
    /// Computes the derived valuation metrics for one holding
    pub fn compute_metrics(holding: &Holding) -> HoldingMetrics {
        let invested_value = holding.quantity * holding.purchase_price;
        let current_value = holding.current_price.map(|price| holding.quantity * price);
        let gain_loss = current_value.map(|current| current - invested_value);
        // invested_value cannot be zero: quantity and purchase price are
        // both validated positive
        let gain_loss_percent =
            gain_loss.map(|gl| gl / invested_value * Decimal::ONE_HUNDRED);

        HoldingMetrics {
            invested_value,
            current_value,
            gain_loss,
            gain_loss_percent,
        }
    }

    /// Builds the presentation view of a holding
    pub fn holding_view(holding: &Holding) -> HoldingView {
        HoldingView::new(holding, Self::compute_metrics(holding))
    }

    /// Aggregates a snapshot of holdings into a portfolio summary.
    ///
    /// Unpriced holdings count toward `total_invested` and
    /// `holdings_count` but are excluded from the value and gain/loss
    /// aggregates and from every ranking.
    pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
        let views: Vec<HoldingView> = holdings.iter().map(Self::holding_view).collect();

        let holdings_count = views.len();
        let holdings_with_prices = views
            .iter()
            .filter(|view| view.current_price.is_some())
            .count();

        let total_invested: Decimal = views.iter().map(|view| view.invested_value).sum();
        let current_value: Decimal = views.iter().filter_map(|view| view.current_value).sum();
        let priced_invested: Decimal = views
            .iter()
            .filter(|view| view.current_value.is_some())
            .map(|view| view.invested_value)
            .sum();

        let total_gain_loss = current_value - priced_invested;
        let total_gain_loss_percent = if priced_invested == Decimal::ZERO {
            None
        } else {
            Some(total_gain_loss / priced_invested * Decimal::ONE_HUNDRED)
        };

        let priced: Vec<&HoldingView> = views
            .iter()
            .filter(|view| view.current_value.is_some())
            .collect();

        let best_performer = priced
            .iter()
            .max_by(|a, b| {
                a.gain_loss_percent
                    .cmp(&b.gain_loss_percent)
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|view| (*view).clone());
        let worst_performer = priced
            .iter()
            .min_by(|a, b| {
                a.gain_loss_percent
                    .cmp(&b.gain_loss_percent)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .map(|view| (*view).clone());

        let mut top_holdings: Vec<HoldingView> =
            priced.into_iter().cloned().collect();
        top_holdings.sort_by(|a, b| {
            b.current_value
                .cmp(&a.current_value)
                .then_with(|| a.id.cmp(&b.id))
        });
        top_holdings.truncate(TOP_HOLDINGS_LIMIT);

        PortfolioSummary {
            total_invested,
            current_value,
            total_gain_loss,
            total_gain_loss_percent,
            holdings_count,
            holdings_with_prices,
            top_holdings,
            best_performer,
            worst_performer,
        }
    }
}
