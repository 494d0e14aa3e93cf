//! Outcome of trying to produce a fill.

use super::fill::Fill;
use serde::{Deserialize, Serialize};

/// Result of a fill-producing operation.
///
/// `NotFilled` means the order legitimately produced no fill (zero order,
/// limit not marketable). `Missing` means a fill could not be determined
/// (no filled quantity, price or timestamp yet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FillOutcome {
    Filled(Fill),
    NotFilled,
    Missing,
}

impl FillOutcome {
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled(_))
    }

    pub fn fill(&self) -> Option<&Fill> {
        match self {
            FillOutcome::Filled(fill) => Some(fill),
            FillOutcome::NotFilled | FillOutcome::Missing => None,
        }
    }

    pub fn into_fill(self) -> Option<Fill> {
        match self {
            FillOutcome::Filled(fill) => Some(fill),
            FillOutcome::NotFilled | FillOutcome::Missing => None,
        }
    }
}

impl From<Fill> for FillOutcome {
    fn from(fill: Fill) -> Self {
        FillOutcome::Filled(fill)
    }
}
