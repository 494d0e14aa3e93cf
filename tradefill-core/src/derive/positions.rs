//! Position-series fill derivation.
//!
//! Turns a target-position series plus an observed price series into fills:
//! 1. Diff adjacent positions; a gap on either side leaves the trade undefined.
//! 2. Drop undefined and zero trades.
//! 3. Forward-fill join against prices: each trade takes the price at its own
//!    timestamp, else the latest earlier price. Never a later one.
//!
//! Both passes walk their inputs once, so derivation is O(n + m).

use crate::domain::{Fill, FillCollection};
use crate::series::{PositionSeries, PriceSeries};
use chrono::{DateTime, Utc};
use std::num::NonZeroI64;

/// A non-zero change in target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub timestamp: DateTime<Utc>,
    pub quantity: NonZeroI64,
}

/// First difference of the position series, minus undefined and zero entries.
///
/// The first point never produces a trade (no prior position). A difference
/// that overflows `i64` is treated as undefined.
pub fn trades_from_positions(positions: &PositionSeries) -> Vec<Trade> {
    positions
        .points()
        .windows(2)
        .filter_map(|pair| {
            let (_, previous) = pair[0];
            let (timestamp, current) = pair[1];
            let diff = current?.checked_sub(previous?)?;
            NonZeroI64::new(diff).map(|quantity| Trade {
                timestamp,
                quantity,
            })
        })
        .collect()
}

/// Price each trade with the last known price at or before its timestamp.
///
/// Trades that precede every known price are dropped with a warning.
/// NaN prices are skipped, so they never become a fill price.
pub fn align_trades_to_prices(trades: &[Trade], prices: &PriceSeries) -> FillCollection {
    let mut known_prices = prices
        .points()
        .iter()
        .filter(|(_, price)| !price.is_nan())
        .peekable();
    let mut last_price: Option<f64> = None;
    let mut fills = Vec::with_capacity(trades.len());
    let mut dropped = 0usize;

    for trade in trades {
        while let Some((_, price)) = known_prices.next_if(|(ts, _)| *ts <= trade.timestamp) {
            last_price = Some(*price);
        }

        match last_price {
            Some(price) => fills.push(Fill::new(trade.timestamp, trade.quantity, price)),
            None => {
                dropped += 1;
                tracing::warn!(
                    timestamp = %trade.timestamp,
                    quantity = trade.quantity.get(),
                    "dropping trade with no price at or before its timestamp"
                );
            }
        }
    }

    tracing::debug!(
        trades = trades.len(),
        fills = fills.len(),
        dropped,
        "aligned trades to prices"
    );

    FillCollection::new(fills)
}

/// Derive fills from a position series and a price series.
///
/// Fills never include slippage. Empty inputs give an empty collection.
pub fn fills_from_position_series(
    positions: &PositionSeries,
    prices: &PriceSeries,
) -> FillCollection {
    let trades = trades_from_positions(positions);
    align_trades_to_prices(&trades, prices)
}

impl FillCollection {
    /// See [`fills_from_position_series`].
    pub fn from_positions_and_prices(positions: &PositionSeries, prices: &PriceSeries) -> Self {
        fills_from_position_series(positions, prices)
    }
}
