//! Value objects - validated, immutable building blocks of the records.

mod names;
mod phase;

pub use names::{CharacterName, PlayerName};
pub use phase::{Phase, PhaseState};
