//! Fill export: CSV and pretty JSON.

use anyhow::{Context, Result};
use tradefill_core::{FillCollection, FillOutcome};

use crate::config::OutputFormat;

// ─── CSV export ─────────────────────────────────────────────────────

/// Columns: timestamp, quantity, price, includes_slippage
pub fn export_fills_csv(fills: &FillCollection, price_decimals: usize) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["timestamp", "quantity", "price", "includes_slippage"])?;

    for fill in fills {
        wtr.write_record([
            &fill.timestamp().to_rfc3339(),
            &fill.quantity().to_string(),
            &format!("{:.*}", price_decimals, fill.price()),
            &fill.includes_slippage().to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

pub fn export_fills_json(fills: &FillCollection) -> Result<String> {
    serde_json::to_string_pretty(fills).context("failed to serialize fills to JSON")
}

pub fn export_outcome_json(outcome: &FillOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("failed to serialize fill outcome to JSON")
}

// ─── Rendering ──────────────────────────────────────────────────────

pub fn render_fills(
    fills: &FillCollection,
    format: OutputFormat,
    price_decimals: usize,
) -> Result<String> {
    match format {
        OutputFormat::Csv => export_fills_csv(fills, price_decimals),
        OutputFormat::Json => export_fills_json(fills),
    }
}

/// A filled outcome renders like a one-row collection. In CSV mode the
/// other outcomes render as a single status word.
pub fn render_outcome(
    outcome: &FillOutcome,
    format: OutputFormat,
    price_decimals: usize,
) -> Result<String> {
    match (format, outcome) {
        (OutputFormat::Json, _) => export_outcome_json(outcome),
        (OutputFormat::Csv, FillOutcome::Filled(fill)) => {
            export_fills_csv(&FillCollection::new(vec![*fill]), price_decimals)
        }
        (OutputFormat::Csv, FillOutcome::NotFilled) => Ok("not filled\n".to_string()),
        (OutputFormat::Csv, FillOutcome::Missing) => Ok("missing\n".to_string()),
    }
}
