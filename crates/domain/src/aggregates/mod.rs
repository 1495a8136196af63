//! Aggregate roots - the two records the rest of the workspace builds on
//!
//! - [`Character`]: immutable reference data, shared as `Arc<Character>`
//! - [`Player`]: mutable per-seat state that references characters
//!
//! | Concern | Rustic Equivalent |
//! |---------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Read-only sharing | `Arc<Character>`, no `&mut` methods on `Character` |
//! | Parallel per-phase lists | One `Vec<PhaseState>` |
//! | Factory pattern | `::new()` + builder pattern |

pub mod character;
pub mod player;

pub use character::Character;
pub use player::{Player, PlayerSnapshot};
