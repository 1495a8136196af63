use serde::{Deserialize, Serialize};

use grimoire_domain::{Alignment, InformationKind};

/// One seat in a new roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub alignment: Alignment,
    /// Character shown to the player
    pub role: String,
    /// True character when different from `role` (e.g. the Drunk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_role: Option<String>,
}

/// Partial update of a player record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlayerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_role: Option<String>,
}

impl UpdatePlayerRequest {
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.death_cause.is_none()
            && self.notes.is_none()
            && self.role.is_none()
            && self.hidden_role.is_none()
    }
}

/// A statement to append to a player's information list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordInformationRequest {
    /// Phase index (0 = Night 1, 1 = Day 1, ...)
    pub phase: u32,
    pub kind: InformationKind,
    pub statement: String,
}

/// One change to a player's per-phase history.
///
/// Everything except `Begin` applies to the player's current phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseActionRequest {
    /// Start recording the next phase (index, 0 = Night 1)
    Begin { phase: u32 },
    Kill {
        #[serde(default)]
        cause: String,
    },
    Revive,
    SetDroisoned { droisoned: bool },
    AddToken { token: String },
    RemoveToken { token: String },
}
