//! Execution-stack order record.
//!
//! Lifecycle (submission, partial updates, cancellation) is owned upstream;
//! here only the final fill fields are read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order as reported by the execution subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier used in logs and error messages.
    #[serde(default)]
    pub key: String,
    /// Requested signed quantity per leg.
    pub trade: Vec<i64>,
    /// Filled signed quantity per leg.
    #[serde(default)]
    pub fill: Vec<i64>,
    #[serde(default)]
    pub filled_price: Option<f64>,
    #[serde(default)]
    pub fill_datetime: Option<DateTime<Utc>>,
}

impl Order {
    /// An unfilled order.
    pub fn new(key: impl Into<String>, trade: Vec<i64>) -> Self {
        let fill = vec![0; trade.len()];
        Self {
            key: key.into(),
            trade,
            fill,
            filled_price: None,
            fill_datetime: None,
        }
    }

    /// Record the fill reported by the broker.
    pub fn with_fill(
        mut self,
        fill: Vec<i64>,
        filled_price: Option<f64>,
        fill_datetime: Option<DateTime<Utc>>,
    ) -> Self {
        self.fill = fill;
        self.filled_price = filled_price;
        self.fill_datetime = fill_datetime;
        self
    }

    pub fn legs(&self) -> usize {
        self.trade.len()
    }

    pub fn is_single_leg(&self) -> bool {
        self.legs() == 1
    }

    /// True when no leg has filled anything (an empty fill vector included).
    pub fn fill_equals_zero(&self) -> bool {
        self.fill.iter().all(|&qty| qty == 0)
    }
}
