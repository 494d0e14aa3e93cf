//! Domain types for tradefill

pub mod collection;
pub mod fill;
pub mod outcome;

pub use collection::{FillCollection, FillRow};
pub use fill::Fill;
pub use outcome::FillOutcome;
