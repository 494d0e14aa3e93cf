//! tradefill CLI: derive and resolve trade fills.
//!
//! Commands:
//! - `positions` derive fills from a position CSV and a price CSV
//! - `orders` resolve a list of simple orders against one market price
//! - `extract` take the fill from one executed order

mod config;
mod export;
mod input;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tradefill_core::{fill_from_order, fill_list_of_simple_orders, fills_from_position_series};

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "tradefill", about = "tradefill: realized trade fills from positions and orders")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides `[output] format` from the config.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter (e.g. `debug`). Overrides `[logging] level` from the config.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive fills from target positions and observed prices.
    Positions {
        /// CSV with columns `timestamp,position`; an empty position is unknown.
        #[arg(long)]
        positions: PathBuf,

        /// CSV with columns `timestamp,price`.
        #[arg(long)]
        prices: PathBuf,
    },
    /// Resolve simple orders against a market price; at most one may fill.
    Orders {
        /// JSON array of `{"quantity": i64, "limit_price": f64?}`.
        #[arg(long)]
        orders: PathBuf,

        /// Observed market price.
        #[arg(long)]
        price: f64,

        /// Fill timestamp (RFC 3339).
        #[arg(long)]
        timestamp: DateTime<Utc>,
    },
    /// Extract the fill from a single-leg executed order.
    Extract {
        /// JSON execution order.
        #[arg(long)]
        order: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    logging::init_tracing(&config.logging.level, config.logging.format)?;

    let output = match cli.command {
        Commands::Positions { positions, prices } => run_positions(&config, &positions, &prices)?,
        Commands::Orders {
            orders,
            price,
            timestamp,
        } => run_orders(&config, &orders, price, timestamp)?,
        Commands::Extract { order } => run_extract(&config, &order)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_positions(config: &CliConfig, positions: &Path, prices: &Path) -> Result<String> {
    let positions = input::read_positions_csv(positions)?;
    let prices = input::read_prices_csv(prices)?;

    let fills = fills_from_position_series(&positions, &prices);
    tracing::info!(
        fills = fills.len(),
        hash = %fills.content_hash(),
        "derived fills from position series"
    );

    export::render_fills(&fills, config.output.format, config.output.price_decimals)
}

fn run_orders(
    config: &CliConfig,
    orders: &Path,
    market_price: f64,
    timestamp: DateTime<Utc>,
) -> Result<String> {
    let orders = input::read_simple_orders(orders)?;
    let outcome = fill_list_of_simple_orders(&orders, timestamp, market_price)?;
    tracing::info!(orders = orders.len(), filled = outcome.is_filled(), "resolved order list");

    export::render_outcome(&outcome, config.output.format, config.output.price_decimals)
}

fn run_extract(config: &CliConfig, order: &Path) -> Result<String> {
    let order = input::read_order(order)?;
    let outcome = fill_from_order(&order)?;
    tracing::info!(key = %order.key, filled = outcome.is_filled(), "extracted fill");

    export::render_outcome(&outcome, config.output.format, config.output.price_decimals)
}
