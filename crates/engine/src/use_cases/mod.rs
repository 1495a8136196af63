//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area and coordinates the
//! domain records with the infrastructure ports.

pub mod roster;

pub use roster::{RosterError, RosterUseCases};
