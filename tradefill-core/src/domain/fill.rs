//! A single executed trade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroI64;

/// Fill record.
///
/// Immutable once built. The quantity is signed (positive = bought,
/// negative = sold) and can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    timestamp: DateTime<Utc>,
    quantity: NonZeroI64,
    price: f64,
    #[serde(default)]
    includes_slippage: bool,
}

impl Fill {
    /// A fill whose price does not account for slippage.
    pub fn new(timestamp: DateTime<Utc>, quantity: NonZeroI64, price: f64) -> Self {
        Self {
            timestamp,
            quantity,
            price,
            includes_slippage: false,
        }
    }

    /// A fill whose price already includes slippage (limit fills).
    pub fn with_slippage(timestamp: DateTime<Utc>, quantity: NonZeroI64, price: f64) -> Self {
        Self {
            includes_slippage: true,
            ..Self::new(timestamp, quantity, price)
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn quantity(&self) -> i64 {
        self.quantity.get()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn includes_slippage(&self) -> bool {
        self.includes_slippage
    }

    pub fn is_buy(&self) -> bool {
        self.quantity.get() > 0
    }
}
