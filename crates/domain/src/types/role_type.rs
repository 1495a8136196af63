//! Character categories and player alignment.
//!
//! Parsing accepts both the full names and the short codes used by
//! hand-written script sheets ("TW", "O", "M", "D", "T").

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The faction a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    #[serde(alias = "TW")]
    Townsfolk,
    #[serde(alias = "O")]
    Outsider,
    #[serde(alias = "M")]
    Minion,
    #[serde(alias = "D")]
    Demon,
    #[serde(alias = "T", alias = "traveller")]
    Traveler,
}

impl RoleType {
    /// All role types in script order.
    pub fn all() -> [RoleType; 5] {
        [
            RoleType::Townsfolk,
            RoleType::Outsider,
            RoleType::Minion,
            RoleType::Demon,
            RoleType::Traveler,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoleType::Townsfolk => "Townsfolk",
            RoleType::Outsider => "Outsider",
            RoleType::Minion => "Minion",
            RoleType::Demon => "Demon",
            RoleType::Traveler => "Traveler",
        }
    }

    /// Short code used on script sheets.
    pub fn code(&self) -> &'static str {
        match self {
            RoleType::Townsfolk => "TW",
            RoleType::Outsider => "O",
            RoleType::Minion => "M",
            RoleType::Demon => "D",
            RoleType::Traveler => "T",
        }
    }

    /// Alignment a character of this type starts the game with.
    ///
    /// Travelers have no fixed alignment; the storyteller picks one.
    pub fn default_alignment(&self) -> Option<Alignment> {
        match self {
            RoleType::Townsfolk | RoleType::Outsider => Some(Alignment::Good),
            RoleType::Minion | RoleType::Demon => Some(Alignment::Evil),
            RoleType::Traveler => None,
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RoleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tw" | "townsfolk" => Ok(RoleType::Townsfolk),
            "o" | "outsider" => Ok(RoleType::Outsider),
            "m" | "minion" => Ok(RoleType::Minion),
            "d" | "demon" => Ok(RoleType::Demon),
            "t" | "traveler" | "traveller" => Ok(RoleType::Traveler),
            _ => Err(DomainError::parse(format!(
                "Unknown role type: '{}'. Valid values: townsfolk (TW), outsider (O), \
                minion (M), demon (D), traveler (T)",
                s
            ))),
        }
    }
}

/// Which team a player is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[serde(alias = "Good")]
    Good,
    #[serde(alias = "Evil")]
    Evil,
}

impl Alignment {
    pub fn opposite(&self) -> Alignment {
        match self {
            Alignment::Good => Alignment::Evil,
            Alignment::Evil => Alignment::Good,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Good => f.write_str("good"),
            Alignment::Evil => f.write_str("evil"),
        }
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Alignment::Good),
            "evil" => Ok(Alignment::Evil),
            _ => Err(DomainError::parse(format!(
                "Unknown alignment: '{}'. Valid values: good, evil",
                s
            ))),
        }
    }
}
