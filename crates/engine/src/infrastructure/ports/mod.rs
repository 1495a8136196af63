//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Roster storage (could swap JSON files -> a database)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
pub mod types;

pub use error::RepoError;
pub use repos::RosterRepo;
pub use testing::ClockPort;
pub use types::{RosterFile, RosterFileError};

#[cfg(test)]
pub use repos::MockRosterRepo;
#[cfg(test)]
pub use testing::MockClockPort;
