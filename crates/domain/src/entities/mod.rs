//! Entities owned by the aggregates.

mod information;

pub use information::{Information, InformationKind};
