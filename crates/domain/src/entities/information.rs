//! Information - clues and statements attached to a player.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Phase;

/// How a piece of information reached the grimoire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationKind {
    /// Given to the player by the storyteller (e.g. a Washerwoman ping)
    Given,
    /// Publicly claimed by the player
    Claimed,
    /// Seen at the table (votes, nominations, reactions)
    Observed,
}

impl fmt::Display for InformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InformationKind::Given => f.write_str("given"),
            InformationKind::Claimed => f.write_str("claimed"),
            InformationKind::Observed => f.write_str("observed"),
        }
    }
}

/// A single statement received by or about a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
    phase: Phase,
    kind: InformationKind,
    statement: String,
    recorded_at: DateTime<Utc>,
}

impl Information {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the statement is blank.
    pub fn new(
        phase: Phase,
        kind: InformationKind,
        statement: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let statement = statement.into();
        if statement.trim().is_empty() {
            return Err(DomainError::validation("Information statement cannot be empty"));
        }
        Ok(Self {
            phase,
            kind,
            statement,
            recorded_at,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn kind(&self) -> InformationKind {
        self.kind
    }

    #[inline]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    #[inline]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
