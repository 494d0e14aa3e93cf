//! Input readers for the CLI.
//!
//! Position and price series come from CSV files with RFC 3339 timestamps.
//! Orders come from JSON.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tradefill_core::{Order, PositionSeries, PriceSeries, SimpleOrder};

#[derive(Debug, Deserialize)]
struct PositionRecord {
    timestamp: DateTime<Utc>,
    /// Empty cell = position unknown at this timestamp.
    position: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    timestamp: DateTime<Utc>,
    /// Empty cell = no observation; kept as NaN so alignment skips it.
    price: Option<f64>,
}

// ─── CSV series ─────────────────────────────────────────────────────

pub fn read_positions_csv(path: &Path) -> Result<PositionSeries> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open positions file {}", path.display()))?;
    parse_positions_csv(file).with_context(|| format!("in {}", path.display()))
}

pub fn read_prices_csv(path: &Path) -> Result<PriceSeries> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open prices file {}", path.display()))?;
    parse_prices_csv(file).with_context(|| format!("in {}", path.display()))
}

pub fn parse_positions_csv<R: Read>(reader: R) -> Result<PositionSeries> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut points = Vec::new();
    for (row, record) in rdr.deserialize::<PositionRecord>().enumerate() {
        let record = record.with_context(|| format!("bad position row {}", row + 1))?;
        points.push((record.timestamp, record.position));
    }
    Ok(PositionSeries::new(points)?)
}

pub fn parse_prices_csv<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut points = Vec::new();
    for (row, record) in rdr.deserialize::<PriceRecord>().enumerate() {
        let record = record.with_context(|| format!("bad price row {}", row + 1))?;
        points.push((record.timestamp, record.price.unwrap_or(f64::NAN)));
    }
    Ok(PriceSeries::new(points)?)
}

// ─── JSON orders ────────────────────────────────────────────────────

pub fn read_simple_orders(path: &Path) -> Result<Vec<SimpleOrder>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read orders file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse simple orders from {}", path.display()))
}

pub fn read_order(path: &Path) -> Result<Order> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read order file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse order from {}", path.display()))
}
