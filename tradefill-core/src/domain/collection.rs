//! Ordered list of genuine fills with a tabular view.

use super::fill::Fill;
use super::outcome::FillOutcome;
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the time-indexed fill table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillRow {
    pub timestamp: DateTime<Utc>,
    pub quantity: i64,
    pub price: f64,
}

/// Ordered collection of fills.
///
/// Holds only real fills: building one from outcomes drops `NotFilled`
/// and `Missing` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillCollection {
    fills: Vec<Fill>,
}

impl FillCollection {
    pub fn new(fills: Vec<Fill>) -> Self {
        Self { fills }
    }

    /// Keep the filled outcomes, in order.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FillOutcome>) -> Self {
        outcomes.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fill> {
        self.fills.iter()
    }

    pub fn as_slice(&self) -> &[Fill] {
        &self.fills
    }

    pub fn into_inner(self) -> Vec<Fill> {
        self.fills
    }

    /// Time-indexed rows, ascending by timestamp.
    ///
    /// The sort is stable: fills sharing a timestamp keep their order.
    pub fn table(&self) -> Vec<FillRow> {
        let mut rows: Vec<FillRow> = self
            .fills
            .iter()
            .map(|f| FillRow {
                timestamp: f.timestamp(),
                quantity: f.quantity(),
                price: f.price(),
            })
            .collect();
        rows.sort_by_key(|r| r.timestamp);
        rows
    }

    /// The table as a Polars DataFrame: `timestamp` (UTC, ns), `quantity`, `price`.
    ///
    /// Fails for timestamps outside the nanosecond range (years 1677 to 2262).
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let rows = self.table();
        let timestamps = rows
            .iter()
            .map(|r| {
                r.timestamp.timestamp_nanos_opt().ok_or_else(|| {
                    PolarsError::ComputeError(
                        format!("fill timestamp {} is out of nanosecond range", r.timestamp).into(),
                    )
                })
            })
            .collect::<PolarsResult<Vec<i64>>>()?;
        let quantities: Vec<i64> = rows.iter().map(|r| r.quantity).collect();
        let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();

        DataFrame::new(vec![
            Column::new("timestamp".into(), timestamps)
                .cast(&DataType::Datetime(TimeUnit::Nanoseconds, Some("UTC".into())))?,
            Column::new("quantity".into(), quantities),
            Column::new("price".into(), prices),
        ])
    }

    /// BLAKE3 digest over every fill, in collection order.
    ///
    /// Two derivations from the same inputs produce the same hash.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for fill in &self.fills {
            let ts = fill.timestamp();
            hasher.update(&ts.timestamp().to_le_bytes());
            hasher.update(&ts.timestamp_subsec_nanos().to_le_bytes());
            hasher.update(&fill.quantity().to_le_bytes());
            hasher.update(&fill.price().to_bits().to_le_bytes());
            hasher.update(&[u8::from(fill.includes_slippage())]);
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl FromIterator<Fill> for FillCollection {
    fn from_iter<I: IntoIterator<Item = Fill>>(iter: I) -> Self {
        Self {
            fills: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<FillOutcome> for FillCollection {
    fn from_iter<I: IntoIterator<Item = FillOutcome>>(iter: I) -> Self {
        iter.into_iter().filter_map(FillOutcome::into_fill).collect()
    }
}

impl IntoIterator for FillCollection {
    type Item = Fill;
    type IntoIter = std::vec::IntoIter<Fill>;

    fn into_iter(self) -> Self::IntoIter {
        self.fills.into_iter()
    }
}

impl<'a> IntoIterator for &'a FillCollection {
    type Item = &'a Fill;
    type IntoIter = std::slice::Iter<'a, Fill>;

    fn into_iter(self) -> Self::IntoIter {
        self.fills.iter()
    }
}
