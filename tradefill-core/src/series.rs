//! Time series inputs: target positions and observed prices.
//!
//! Both series are indexed by strictly increasing UTC timestamps. A position
//! of `None` means "position unknown at this time"; a NaN price is treated
//! as no observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("timestamp at index {index} ({timestamp}) is not after its predecessor")]
    NotIncreasing {
        index: usize,
        timestamp: DateTime<Utc>,
    },
}

/// A series of `(timestamp, value)` points in strictly increasing time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<(DateTime<Utc>, T)>",
    into = "Vec<(DateTime<Utc>, T)>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct TimeSeries<T> {
    points: Vec<(DateTime<Utc>, T)>,
}

/// Target position per timestamp; `None` marks a gap.
pub type PositionSeries = TimeSeries<Option<i64>>;

/// Observed price per timestamp.
pub type PriceSeries = TimeSeries<f64>;

impl<T> TimeSeries<T> {
    pub fn new(points: Vec<(DateTime<Utc>, T)>) -> Result<Self, SeriesError> {
        if let Some(index) = points.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(SeriesError::NotIncreasing {
                index: index + 1,
                timestamp: points[index + 1].0,
            });
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(DateTime<Utc>, T)] {
        &self.points
    }

    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.points.iter().map(|(ts, _)| *ts)
    }
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> TryFrom<Vec<(DateTime<Utc>, T)>> for TimeSeries<T> {
    type Error = SeriesError;

    fn try_from(points: Vec<(DateTime<Utc>, T)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<T> From<TimeSeries<T>> for Vec<(DateTime<Utc>, T)> {
    fn from(series: TimeSeries<T>) -> Self {
        series.points
    }
}
