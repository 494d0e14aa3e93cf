//! Fill extraction from execution-stack orders.

use super::error::FillError;
use crate::domain::{Fill, FillOutcome};
use crate::orders::Order;
use std::num::NonZeroI64;

/// Extract the fill from a single-leg order.
///
/// Checks run in order: multi-leg is an error; no filled quantity, no
/// filled price or no fill timestamp each give `Missing`.
pub fn fill_from_order(order: &Order) -> Result<FillOutcome, FillError> {
    if !order.is_single_leg() {
        return Err(FillError::MultiLegOrder {
            key: order.key.clone(),
            legs: order.legs(),
        });
    }

    if order.fill_equals_zero() {
        return Ok(FillOutcome::Missing);
    }

    let Some(filled_price) = order.filled_price else {
        tracing::debug!(order = %order.key, "filled order has no price yet");
        return Ok(FillOutcome::Missing);
    };

    let Some(fill_datetime) = order.fill_datetime else {
        tracing::debug!(order = %order.key, "filled order has no fill time yet");
        return Ok(FillOutcome::Missing);
    };

    // A fill vector longer than the trade vector can still lead with zero
    let Some(quantity) = order.fill.first().copied().and_then(NonZeroI64::new) else {
        return Ok(FillOutcome::Missing);
    };

    Ok(FillOutcome::Filled(Fill::new(fill_datetime, quantity, filled_price)))
}
