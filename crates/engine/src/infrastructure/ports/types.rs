//! Value types used at the port boundary.

use std::fmt;

use thiserror::Error;

/// Why a roster file name was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterFileError {
    #[error("Missing file parameter.")]
    Missing,
    #[error("Invalid file name '{0}': expected a plain file name ending in .json")]
    Invalid(String),
}

/// Name of a roster file inside the game directory, e.g. `game-03.json`.
///
/// Only plain file names are accepted, so a roster can never point outside
/// the configured directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterFile(String);

impl RosterFile {
    pub fn new(name: impl Into<String>) -> Result<Self, RosterFileError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterFileError::Missing);
        }
        let is_plain = !trimmed.contains(['/', '\\'])
            && !trimmed.contains("..")
            && !trimmed.starts_with('.');
        if !is_plain || !trimmed.ends_with(".json") || trimmed.len() == ".json".len() {
            return Err(RosterFileError::Invalid(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Accepts an optional query value, treating absence as `Missing`.
    pub fn from_query(value: Option<String>) -> Result<Self, RosterFileError> {
        value.map_or(Err(RosterFileError::Missing), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RosterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
