//! Criterion benchmarks for tradefill hot paths.
//!
//! Benchmarks:
//! 1. Position-series derivation (diff + forward-fill join) at several sizes
//! 2. Per-instrument batch derivation (rayon)
//! 3. Order list resolution

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeMap;

use tradefill_core::{
    derive_fills_by_instrument, fill_list_of_simple_orders, fills_from_position_series,
    InstrumentSeries, PositionSeries, PriceSeries, SimpleOrder,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn t(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 1, 2, 0, 0, 0).unwrap() + Duration::minutes(i as i64)
}

/// Positions that change most bars, with a gap every 97 bars.
fn make_positions(n: usize) -> PositionSeries {
    PositionSeries::new(
        (0..n)
            .map(|i| {
                let position = if i % 97 == 0 {
                    None
                } else {
                    Some(((i as f64 * 0.05).sin() * 20.0).round() as i64)
                };
                (t(i), position)
            })
            .collect(),
    )
    .unwrap()
}

/// Prices on every third bar only, so most trades forward-fill.
fn make_prices(n: usize) -> PriceSeries {
    PriceSeries::new(
        (0..n)
            .step_by(3)
            .map(|i| (t(i), 100.0 + (i as f64 * 0.1).sin() * 10.0))
            .collect(),
    )
    .unwrap()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_position_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fills_from_position_series");
    for n in [1_000, 10_000, 100_000] {
        let positions = make_positions(n);
        let prices = make_prices(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| fills_from_position_series(black_box(&positions), black_box(&prices)))
        });
    }
    group.finish();
}

fn bench_batch_derivation(c: &mut Criterion) {
    let inputs: BTreeMap<String, InstrumentSeries> = (0..32)
        .map(|k| {
            (
                format!("INST{k:02}"),
                InstrumentSeries {
                    positions: make_positions(10_000),
                    prices: make_prices(10_000),
                },
            )
        })
        .collect();

    c.bench_function("derive_fills_by_instrument_32x10k", |b| {
        b.iter(|| derive_fills_by_instrument(black_box(&inputs)))
    });
}

fn bench_order_list(c: &mut Criterion) {
    let orders = vec![
        SimpleOrder::limit(5, 99.0),
        SimpleOrder::limit(-5, 101.0),
        SimpleOrder::zero(),
        SimpleOrder::limit(2, 98.5),
    ];
    c.bench_function("fill_list_of_simple_orders", |b| {
        b.iter(|| fill_list_of_simple_orders(black_box(&orders), t(0), black_box(98.8)))
    });
}

criterion_group!(
    benches,
    bench_position_derivation,
    bench_batch_derivation,
    bench_order_list
);
criterion_main!(benches);
