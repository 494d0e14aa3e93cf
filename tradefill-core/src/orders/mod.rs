//! Order representations consumed by the fill resolvers.
//!
//! - [`SimpleOrder`]: quantity plus optional limit price, from order construction
//! - [`Order`]: multi-leg execution record with broker fill fields

pub mod generic;
pub mod simple;

pub use generic::Order;
pub use simple::{SimpleOrder, SimpleOrderKind};
