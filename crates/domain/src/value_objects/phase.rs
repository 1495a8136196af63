//! Game phases and the per-phase state kept for each player.
//!
//! Phases alternate night and day starting from Night 1:
//! index 0 = Night 1, 1 = Day 1, 2 = Night 2, and so on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A phase of the game, identified by its position in the night/day sequence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Phase(u32);

impl Phase {
    /// The first phase of every game.
    pub const FIRST_NIGHT: Phase = Phase(0);

    /// Phase from its raw sequence index.
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Night `n` (1-based).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `n` is zero or out of range.
    pub fn night(n: u32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::validation("Night numbers start at 1"));
        }
        (n - 1)
            .checked_mul(2)
            .map(Self)
            .ok_or_else(|| out_of_range("Night", n))
    }

    /// Day `n` (1-based).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `n` is zero or out of range.
    pub fn day(n: u32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::validation("Day numbers start at 1"));
        }
        (n - 1)
            .checked_mul(2)
            .and_then(|index| index.checked_add(1))
            .map(Self)
            .ok_or_else(|| out_of_range("Day", n))
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_night(self) -> bool {
        self.0 % 2 == 0
    }

    #[inline]
    pub fn is_day(self) -> bool {
        !self.is_night()
    }

    /// The 1-based night or day number.
    #[inline]
    pub fn number(self) -> u32 {
        self.0 / 2 + 1
    }

    /// The phase after this one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` past the last representable phase.
    pub fn next(self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("No phase follows {}", self)))
    }
}

fn out_of_range(label: &str, n: u32) -> DomainError {
    DomainError::validation(format!("{} {} is out of range", label, n))
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_night() { "Night" } else { "Day" };
        write!(f, "{} {}", label, self.number())
    }
}

/// Everything recorded about one player for a single phase.
///
/// Liveness, droisoning and reminder tokens live together so the three
/// histories always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    pub alive: bool,
    pub droisoned: bool,
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl PhaseState {
    /// State for a phase that follows one in which the player had the given liveness.
    pub fn carried_from(alive: bool) -> Self {
        Self {
            alive,
            droisoned: false,
            tokens: Vec::new(),
        }
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::carried_from(true)
    }
}
