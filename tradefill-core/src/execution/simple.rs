//! Simple-order fill resolution against one observed market price.
//!
//! - Market orders always fill at the market price, no slippage.
//! - Limit orders fill at the limit price only when marketable (buy limit
//!   above market, sell limit below market). The gap to the market is
//!   booked as slippage.
//! - Zero orders never fill.

use super::error::FillError;
use crate::domain::{Fill, FillCollection, FillOutcome};
use crate::orders::{SimpleOrder, SimpleOrderKind};
use chrono::{DateTime, Utc};
use std::num::NonZeroI64;

/// Resolve one order. Returns `Filled` or `NotFilled`, never `Missing`.
pub fn fill_from_simple_order(
    order: &SimpleOrder,
    market_price: f64,
    fill_datetime: DateTime<Utc>,
) -> FillOutcome {
    match order.kind() {
        SimpleOrderKind::Zero => FillOutcome::NotFilled,
        SimpleOrderKind::Market { quantity } => {
            fill_from_simple_market_order(quantity, market_price, fill_datetime)
        }
        SimpleOrderKind::Limit {
            quantity,
            limit_price,
        } => fill_from_simple_limit_order(quantity, limit_price, market_price, fill_datetime),
    }
}

pub fn fill_from_simple_market_order(
    quantity: NonZeroI64,
    market_price: f64,
    fill_datetime: DateTime<Utc>,
) -> FillOutcome {
    FillOutcome::Filled(Fill::new(fill_datetime, quantity, market_price))
}

pub fn fill_from_simple_limit_order(
    quantity: NonZeroI64,
    limit_price: f64,
    market_price: f64,
    fill_datetime: DateTime<Utc>,
) -> FillOutcome {
    let marketable = if quantity.get() > 0 {
        limit_price > market_price
    } else {
        limit_price < market_price
    };

    if marketable {
        FillOutcome::Filled(Fill::with_slippage(fill_datetime, quantity, limit_price))
    } else {
        FillOutcome::NotFilled
    }
}

/// Resolve every order against the same price; at most one may fill.
///
/// Zero fills gives `NotFilled`, one gives that fill, more than one means
/// the caller supplied contradictory orders and is an error.
pub fn fill_list_of_simple_orders(
    orders: &[SimpleOrder],
    fill_datetime: DateTime<Utc>,
    market_price: f64,
) -> Result<FillOutcome, FillError> {
    let fills: FillCollection = orders
        .iter()
        .map(|order| fill_from_simple_order(order, market_price, fill_datetime))
        .collect();

    let mut fills = fills.into_inner();
    match fills.len() {
        0 => Ok(FillOutcome::NotFilled),
        1 => Ok(fills.remove(0).into()),
        _ => Err(FillError::MultipleFills {
            orders: orders.to_vec(),
            fills,
        }),
    }
}
