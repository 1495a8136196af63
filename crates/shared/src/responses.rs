//! Response bodies returned by the engine.

use serde::{Deserialize, Serialize};

use grimoire_domain::{Character, PlayerSnapshot};

/// Plain status message, also used for every error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A player after a successful write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub message: String,
    pub player: PlayerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterCreatedResponse {
    pub message: String,
    pub file_name: String,
}

/// The characters a server resolves roles against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub name: String,
    pub characters: Vec<Character>,
}
