//! End-to-end examples for the three fill entry points.
//!
//! Each test drives the public API only: position-series derivation,
//! simple-order resolution (single and list), and execution-order extraction.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeMap;
use tradefill_core::{
    derive_fills_by_instrument, fill_from_order, fill_from_simple_order,
    fill_list_of_simple_orders, FillCollection, FillError, FillOutcome, InstrumentSeries, Order,
    PositionSeries, PriceSeries, SimpleOrder,
};

// ─── Helpers ──────────────────────────────────────────────────────────

fn t(i: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap() + Duration::minutes(i)
}

fn position_series(values: &[Option<i64>]) -> PositionSeries {
    PositionSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, p)| (t(i as i64), *p))
            .collect(),
    )
    .unwrap()
}

fn price_series(values: &[f64]) -> PriceSeries {
    PriceSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, p)| (t(i as i64), *p))
            .collect(),
    )
    .unwrap()
}

// ─── Position-series derivation ──────────────────────────────────────

#[test]
fn positions_example_from_diffs() {
    let positions = position_series(&[Some(0), Some(0), Some(5), Some(5), Some(3)]);
    let prices = price_series(&[10.0, 11.0, 12.0, 13.0, 14.0]);

    let fills = FillCollection::from_positions_and_prices(&positions, &prices);

    let got: Vec<(DateTime<Utc>, i64, f64)> = fills
        .iter()
        .map(|f| (f.timestamp(), f.quantity(), f.price()))
        .collect();
    assert_eq!(got, vec![(t(2), 5, 12.0), (t(4), -2, 14.0)]);
    assert!(fills.iter().all(|f| !f.includes_slippage()));
}

#[test]
fn positions_with_gaps_and_sparse_prices() {
    // Prices only every other minute; position unknown at minute 3.
    let positions = position_series(&[Some(0), Some(1), Some(1), None, Some(4), Some(2)]);
    let prices = PriceSeries::new(vec![(t(0), 50.0), (t(2), 52.0), (t(4), 54.0)]).unwrap();

    let fills = FillCollection::from_positions_and_prices(&positions, &prices);
    let table = fills.table();

    assert_eq!(table.len(), 2);
    assert_eq!((table[0].timestamp, table[0].quantity, table[0].price), (t(1), 1, 50.0));
    assert_eq!((table[1].timestamp, table[1].quantity, table[1].price), (t(5), -2, 54.0));
}

#[test]
fn derivation_is_repeatable() {
    let positions = position_series(&[Some(0), Some(3), Some(-2), Some(-2), Some(6)]);
    let prices = price_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let first = FillCollection::from_positions_and_prices(&positions, &prices);
    let second = FillCollection::from_positions_and_prices(&positions, &prices);

    assert_eq!(first, second);
    assert_eq!(first.content_hash(), second.content_hash());
}

#[test]
fn dataframe_matches_table() {
    let positions = position_series(&[Some(0), Some(2), Some(1)]);
    let prices = price_series(&[100.0, 101.0, 102.0]);
    let fills = FillCollection::from_positions_and_prices(&positions, &prices);

    let df = fills.to_dataframe().unwrap();
    let quantities: Vec<Option<i64>> =
        df.column("quantity").unwrap().i64().unwrap().into_iter().collect();
    assert_eq!(quantities, vec![Some(2), Some(-1)]);
}

#[test]
fn batch_derivation_across_instruments() {
    let mut inputs = BTreeMap::new();
    inputs.insert(
        "GOLD".to_string(),
        InstrumentSeries {
            positions: position_series(&[Some(0), Some(1)]),
            prices: price_series(&[2000.0, 2010.0]),
        },
    );
    inputs.insert(
        "CORN".to_string(),
        InstrumentSeries {
            positions: position_series(&[Some(2), Some(2)]),
            prices: price_series(&[450.0, 455.0]),
        },
    );

    let fills = derive_fills_by_instrument(&inputs);
    assert_eq!(fills["GOLD"].len(), 1);
    assert!(fills["CORN"].is_empty());
}

// ─── Simple orders ───────────────────────────────────────────────────

#[test]
fn buy_limit_above_market_fills_at_limit() {
    let outcome = fill_from_simple_order(&SimpleOrder::limit(10, 101.0), 100.0, t(0));
    let fill = outcome.into_fill().unwrap();
    assert_eq!(fill.quantity(), 10);
    assert_eq!(fill.price(), 101.0);
    assert!(fill.includes_slippage());
}

#[test]
fn buy_limit_below_market_not_filled() {
    let outcome = fill_from_simple_order(&SimpleOrder::limit(10, 99.0), 100.0, t(0));
    assert_eq!(outcome, FillOutcome::NotFilled);
}

#[test]
fn zero_order_not_filled_at_any_price() {
    for price in [1.0, 100.0, 1e9] {
        assert_eq!(
            fill_from_simple_order(&SimpleOrder::zero(), price, t(0)),
            FillOutcome::NotFilled
        );
    }
}

#[test]
fn bracketing_limit_orders_fill_at_most_once() {
    // A buy below market and a sell above market: neither is marketable.
    let resting = [SimpleOrder::limit(1, 99.0), SimpleOrder::limit(-1, 101.0)];
    assert_eq!(
        fill_list_of_simple_orders(&resting, t(0), 100.0),
        Ok(FillOutcome::NotFilled)
    );

    // Market gaps down through the buy limit.
    let outcome = fill_list_of_simple_orders(&resting, t(1), 98.0).unwrap();
    let fill = outcome.into_fill().unwrap();
    assert_eq!(fill.quantity(), 1);
    assert_eq!(fill.price(), 99.0);
}

#[test]
fn contradictory_orders_are_rejected() {
    let orders = [SimpleOrder::market(5), SimpleOrder::market(-5)];
    let result = fill_list_of_simple_orders(&orders, t(0), 100.0);
    assert!(matches!(result, Err(FillError::MultipleFills { .. })));
}

// ─── Execution orders ────────────────────────────────────────────────

#[test]
fn two_leg_order_is_rejected() {
    let order = Order::new("spread", vec![5, 5]);
    assert!(matches!(
        fill_from_order(&order),
        Err(FillError::MultiLegOrder { legs: 2, .. })
    ));
}

#[test]
fn order_without_filled_price_is_missing() {
    let order = Order::new("outright", vec![5]).with_fill(vec![5], None, Some(t(0)));
    assert_eq!(fill_from_order(&order), Ok(FillOutcome::Missing));
}

#[test]
fn order_from_json_yields_fill() {
    let json = r#"{
        "key": "ES-2024-06",
        "trade": [-2],
        "fill": [-2],
        "filled_price": 5301.25,
        "fill_datetime": "2024-05-20T14:31:07Z"
    }"#;
    let order: Order = serde_json::from_str(json).unwrap();
    let fill = fill_from_order(&order).unwrap().into_fill().unwrap();
    assert_eq!(fill.quantity(), -2);
    assert_eq!(fill.price(), 5301.25);
    assert_eq!(
        fill.timestamp(),
        Utc.with_ymd_and_hms(2024, 5, 20, 14, 31, 7).unwrap()
    );
}
