//! Fills derived from target-position series (the backtest path).

pub mod batch;
pub mod positions;

pub use batch::{derive_fills_by_instrument, InstrumentSeries};
pub use positions::{align_trades_to_prices, fills_from_position_series, trades_from_positions, Trade};
