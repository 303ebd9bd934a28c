use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::holdings::{AssetType, Holding};
use crate::portfolio::PortfolioCalculator;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// Helper to build holding snapshots without going through a store
fn create_holding(
    id: &str,
    symbol: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Option<Decimal>,
) -> Holding {
    let now = Utc::now().naive_utc();
    Holding {
        id: id.to_string(),
        symbol: symbol.to_string(),
        asset_name: format!("{} Asset", symbol),
        asset_type: AssetType::Stock,
        quantity,
        purchase_price,
        purchase_date: date("2024-01-15"),
        current_price,
        last_price_update: current_price.map(|_| now),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn metrics_for_priced_holding() {
    // quantity=10, purchase=100, current=150
    let holding = create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150)));

    let metrics = PortfolioCalculator::compute_metrics(&holding);

    assert_eq!(metrics.invested_value, dec!(1000));
    assert_eq!(metrics.current_value, Some(dec!(1500)));
    assert_eq!(metrics.gain_loss, Some(dec!(500)));
    assert_eq!(metrics.gain_loss_percent, Some(dec!(50.00)));
}

#[test]
fn metrics_for_unpriced_holding() {
    let holding = create_holding("h1", "MSFT", dec!(5), dec!(100), None);

    let metrics = PortfolioCalculator::compute_metrics(&holding);

    assert_eq!(metrics.invested_value, dec!(500));
    assert_eq!(metrics.current_value, None);
    assert_eq!(metrics.gain_loss, None);
    assert_eq!(metrics.gain_loss_percent, None);
}

#[test]
fn metrics_for_fractional_quantity() {
    // fractional units, as for crypto
    let holding = create_holding("h1", "BTC", dec!(0.25), dec!(40000), Some(dec!(44000)));

    let metrics = PortfolioCalculator::compute_metrics(&holding);

    assert_eq!(metrics.invested_value, dec!(10000));
    assert_eq!(metrics.current_value, Some(dec!(11000)));
    assert_eq!(metrics.gain_loss, Some(dec!(1000)));
    assert_eq!(metrics.gain_loss_percent, Some(dec!(10)));
}

#[test]
fn metrics_for_losing_holding() {
    let holding = create_holding("h1", "GME", dec!(4), dec!(50), Some(dec!(40)));

    let metrics = PortfolioCalculator::compute_metrics(&holding);

    assert_eq!(metrics.invested_value, dec!(200));
    assert_eq!(metrics.current_value, Some(dec!(160)));
    assert_eq!(metrics.gain_loss, Some(dec!(-40)));
    assert_eq!(metrics.gain_loss_percent, Some(dec!(-20)));
}

#[test]
fn summarize_empty_portfolio() {
    let summary = PortfolioCalculator::summarize(&[]);

    assert_eq!(summary.holdings_count, 0);
    assert_eq!(summary.holdings_with_prices, 0);
    assert_eq!(summary.total_invested, Decimal::ZERO);
    assert_eq!(summary.current_value, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss_percent, None);
    assert!(summary.top_holdings.is_empty());
    assert!(summary.best_performer.is_none());
    assert!(summary.worst_performer.is_none());
}

#[test]
fn summarize_excludes_unpriced_from_gain_loss() {
    // one priced (invested 1000, current 1500), one unpriced (invested 500)
    let holdings = vec![
        create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150))),
        create_holding("h2", "MSFT", dec!(5), dec!(100), None),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.holdings_count, 2);
    assert_eq!(summary.holdings_with_prices, 1);
    // total invested counts everything
    assert_eq!(summary.total_invested, dec!(1500));
    // value and gain/loss aggregates count priced holdings only
    assert_eq!(summary.current_value, dec!(1500));
    assert_eq!(summary.total_gain_loss, dec!(500));
    assert_eq!(summary.total_gain_loss_percent, Some(dec!(50.00)));
    assert_eq!(summary.top_holdings.len(), 1);
    assert_eq!(summary.top_holdings[0].symbol, "AAPL");
}

#[test]
fn summarize_without_priced_holdings() {
    let holdings = vec![
        create_holding("h1", "AAPL", dec!(10), dec!(100), None),
        create_holding("h2", "MSFT", dec!(5), dec!(200), None),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.holdings_count, 2);
    assert_eq!(summary.holdings_with_prices, 0);
    assert_eq!(summary.total_invested, dec!(2000));
    assert_eq!(summary.current_value, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss, Decimal::ZERO);
    assert_eq!(summary.total_gain_loss_percent, None);
    assert!(summary.top_holdings.is_empty());
    assert!(summary.best_performer.is_none());
    assert!(summary.worst_performer.is_none());
}

#[test]
fn summarize_is_order_independent() {
    let mut holdings = vec![
        create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150))),
        create_holding("h2", "MSFT", dec!(5), dec!(200), Some(dec!(180))),
        create_holding("h3", "BTC", dec!(0.5), dec!(40000), Some(dec!(50000))),
        create_holding("h4", "BND", dec!(20), dec!(75), None),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);
    holdings.reverse();
    let reversed = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary, reversed);
}

#[test]
fn top_holdings_ranked_by_value_and_truncated() {
    // six priced holdings; two share the largest value to exercise the
    // ascending-id tie-break
    let holdings = vec![
        create_holding("h6", "F", dec!(1), dec!(50), Some(dec!(100))),
        create_holding("h5", "E", dec!(1), dec!(150), Some(dec!(200))),
        create_holding("h4", "D", dec!(1), dec!(250), Some(dec!(300))),
        create_holding("h3", "C", dec!(1), dec!(350), Some(dec!(400))),
        create_holding("h2", "B", dec!(1), dec!(450), Some(dec!(500))),
        create_holding("h1", "A", dec!(1), dec!(400), Some(dec!(500))),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.top_holdings.len(), 5);
    let ids: Vec<&str> = summary
        .top_holdings
        .iter()
        .map(|view| view.id.as_str())
        .collect();
    // h1 and h2 tie at 500 and resolve by ascending id; h6 falls off
    assert_eq!(ids, vec!["h1", "h2", "h3", "h4", "h5"]);
}

#[test]
fn best_and_worst_performer_selection() {
    let holdings = vec![
        create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150))), // +50%
        create_holding("h2", "MSFT", dec!(5), dec!(200), Some(dec!(180))),  // -10%
        create_holding("h3", "BND", dec!(10), dec!(80), Some(dec!(88))),    // +10%
        create_holding("h4", "DOGE", dec!(1000), dec!(0.10), None),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.best_performer.as_ref().unwrap().symbol, "AAPL");
    assert_eq!(
        summary.best_performer.unwrap().gain_loss_percent,
        Some(dec!(50))
    );
    assert_eq!(summary.worst_performer.as_ref().unwrap().symbol, "MSFT");
    assert_eq!(
        summary.worst_performer.unwrap().gain_loss_percent,
        Some(dec!(-10))
    );
}

#[test]
fn single_priced_holding_is_best_and_worst() {
    let holdings = vec![
        create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150))),
        create_holding("h2", "MSFT", dec!(5), dec!(100), None),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.best_performer.as_ref().unwrap().id, "h1");
    assert_eq!(summary.worst_performer.as_ref().unwrap().id, "h1");
}

#[test]
fn performer_ties_resolve_to_lower_id() {
    // identical percentages on distinct holdings
    let holdings = vec![
        create_holding("h2", "MSFT", dec!(5), dec!(100), Some(dec!(150))),
        create_holding("h1", "AAPL", dec!(10), dec!(100), Some(dec!(150))),
    ];

    let summary = PortfolioCalculator::summarize(&holdings);

    assert_eq!(summary.best_performer.as_ref().unwrap().id, "h1");
    assert_eq!(summary.worst_performer.as_ref().unwrap().id, "h1");
}

#[test]
fn holding_view_serializes_camel_case_with_rounding() {
    // (4 - 3) / 3 * 100 repeats; serialization rounds to six places
    let holding = create_holding("h1", "VT", dec!(7), dec!(3), Some(dec!(4)));

    let view = PortfolioCalculator::holding_view(&holding);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["symbol"], "VT");
    assert_eq!(json["investedValue"], "21");
    assert_eq!(json["currentValue"], "28");
    assert_eq!(json["gainLoss"], "7");
    assert_eq!(json["gainLossPercent"], "33.333333");
    assert!(json.get("asset_name").is_none());
    assert_eq!(json["assetName"], "VT Asset");
}

#[test]
fn summary_serializes_absent_percent_as_null() {
    let holdings = vec![create_holding("h1", "AAPL", dec!(10), dec!(100), None)];

    let summary = PortfolioCalculator::summarize(&holdings);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["totalInvested"], "1000");
    assert_eq!(json["totalGainLossPercent"], serde_json::Value::Null);
    assert_eq!(json["holdingsCount"], 1);
    assert_eq!(json["holdingsWithPrices"], 0);
}
