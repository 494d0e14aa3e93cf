use serde::{Deserialize, Serialize};
use std::num::NonZeroI64;

/// Minimal order: a signed quantity and an optional limit price.
///
/// No limit price means a market order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleOrder {
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
}

/// Exhaustive, mutually exclusive classification of a [`SimpleOrder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimpleOrderKind {
    /// Quantity is zero, whatever the price.
    Zero,
    Market { quantity: NonZeroI64 },
    Limit { quantity: NonZeroI64, limit_price: f64 },
}

impl SimpleOrder {
    pub fn market(quantity: i64) -> Self {
        Self {
            quantity,
            limit_price: None,
        }
    }

    pub fn limit(quantity: i64, limit_price: f64) -> Self {
        Self {
            quantity,
            limit_price: Some(limit_price),
        }
    }

    pub fn zero() -> Self {
        Self::market(0)
    }

    pub fn kind(&self) -> SimpleOrderKind {
        let Some(quantity) = NonZeroI64::new(self.quantity) else {
            return SimpleOrderKind::Zero;
        };
        match self.limit_price {
            None => SimpleOrderKind::Market { quantity },
            Some(limit_price) => SimpleOrderKind::Limit {
                quantity,
                limit_price,
            },
        }
    }

    pub fn is_zero_order(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_market_order(&self) -> bool {
        matches!(self.kind(), SimpleOrderKind::Market { .. })
    }
}
