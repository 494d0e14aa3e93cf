//! tradefill core: realized trade fills.
//!
//! Three independent entry points produce fills:
//! - Position series + price series → fills (backtest path, [`derive`])
//! - Simple market/limit orders against a market price ([`execution::simple`])
//! - Single-leg execution orders with broker fill fields ([`execution::generic`])
//!
//! Results that may legitimately produce nothing are returned as a
//! [`domain::FillOutcome`]; structural input errors as [`execution::FillError`].

pub mod derive;
pub mod domain;
pub mod execution;
pub mod orders;
pub mod series;

pub use derive::{derive_fills_by_instrument, fills_from_position_series, InstrumentSeries};
pub use domain::{Fill, FillCollection, FillOutcome, FillRow};
pub use execution::{fill_from_order, fill_from_simple_order, fill_list_of_simple_orders, FillError};
pub use orders::{Order, SimpleOrder, SimpleOrderKind};
pub use series::{PositionSeries, PriceSeries, SeriesError, TimeSeries};
