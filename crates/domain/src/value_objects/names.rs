//! Validated name newtypes for domain records
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Free of leading/trailing whitespace
//!
//! A name is stored exactly as given; input that would need trimming is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (CharacterName, PlayerName)
const MAX_NAME_LENGTH: usize = 200;

fn validate_name(kind: &str, name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!("{} name cannot be empty", kind)));
    }
    if name.trim() != name {
        return Err(DomainError::validation(format!(
            "{} name cannot start or end with whitespace",
            kind
        )));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} name cannot exceed {} characters",
            kind, MAX_NAME_LENGTH
        )));
    }
    Ok(name)
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name, e.g. "Washerwoman" (non-empty, <=200 chars, no surrounding whitespace)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty or only whitespace
    /// - The name starts or ends with whitespace
    /// - The name exceeds 200 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validate_name("Character", name.into()).map(Self)
    }

    /// Wrap a name from a built-in table without validation.
    pub(crate) fn from_trusted(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated name of a seated player (non-empty, <=200 chars, no surrounding whitespace)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is blank, has surrounding
    /// whitespace, or is longer than 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validate_name("Player", name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}
