use crate::domain::Fill;
use crate::orders::SimpleOrder;
use thiserror::Error;

/// Structural input errors. These abort the current resolution and are
/// never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FillError {
    #[error("order {key:?} has {legs} legs; fills can only be taken from single-leg orders")]
    MultiLegOrder { key: String, legs: usize },

    #[error("{} orders produced {} fills; at most one may fill", orders.len(), fills.len())]
    MultipleFills {
        orders: Vec<SimpleOrder>,
        fills: Vec<Fill>,
    },
}
