//! Per-instrument batch derivation, one rayon task per instrument.

use super::positions::fills_from_position_series;
use crate::domain::FillCollection;
use crate::series::{PositionSeries, PriceSeries};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position and price series for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSeries {
    pub positions: PositionSeries,
    pub prices: PriceSeries,
}

/// Derive fills for every instrument in parallel.
///
/// Each instrument is independent, so the result equals running
/// [`fills_from_position_series`] on each entry in turn.
pub fn derive_fills_by_instrument(
    inputs: &BTreeMap<String, InstrumentSeries>,
) -> BTreeMap<String, FillCollection> {
    inputs
        .par_iter()
        .map(|(instrument, series)| {
            let _span = tracing::debug_span!("derive_fills", %instrument).entered();
            let fills = fills_from_position_series(&series.positions, &series.prices);
            (instrument.clone(), fills)
        })
        .collect()
}
