//! Execution path: fills resolved from explicit orders.
//!
//! Key concepts:
//! - **Simple orders**: market or limit, resolved against one observed price
//! - **Order lists**: at most one order in a list may fill
//! - **Execution orders**: single-leg records whose broker fill is read back

pub mod error;
pub mod generic;
pub mod simple;

pub use error::FillError;
pub use generic::fill_from_order;
pub use simple::{
    fill_from_simple_limit_order, fill_from_simple_market_order, fill_from_simple_order,
    fill_list_of_simple_orders,
};
