//! Character aggregate - the static description of one role
//!
//! A `Character` is reference data: it is built once (from a script) and
//! never changes afterwards. There are no setters. Players share characters
//! through `Arc<Character>` handed out by a [`Script`](crate::Script).

use serde::{Deserialize, Serialize};

use crate::types::{AbilityTiming, RoleType};
use crate::value_objects::CharacterName;

/// A character archetype such as the Washerwoman or the Imp.
///
/// # Example
///
/// ```
/// use grimoire_domain::{AbilityTiming, Character, CharacterName, RoleType};
///
/// let washerwoman = Character::new(
///     CharacterName::new("Washerwoman").unwrap(),
///     RoleType::Townsfolk,
///     AbilityTiming::FirstNightOnly,
///     "You start knowing that 1 of 2 players is a particular Townsfolk.",
///     "",
/// );
///
/// assert_eq!(washerwoman.name().as_str(), "Washerwoman");
/// assert_eq!(washerwoman.role_type(), RoleType::Townsfolk);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: CharacterName,
    role_type: RoleType,
    ability_timing: AbilityTiming,
    ability_description: String,
    #[serde(default)]
    setup: String,
}

impl Character {
    /// Create a character. Every value is stored exactly as given.
    pub fn new(
        name: CharacterName,
        role_type: RoleType,
        ability_timing: AbilityTiming,
        ability_description: impl Into<String>,
        setup: impl Into<String>,
    ) -> Self {
        Self {
            name,
            role_type,
            ability_timing,
            ability_description: ability_description.into(),
            setup: setup.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn role_type(&self) -> RoleType {
        self.role_type
    }

    #[inline]
    pub fn ability_timing(&self) -> AbilityTiming {
        self.ability_timing
    }

    /// Almanac rules text.
    #[inline]
    pub fn ability_description(&self) -> &str {
        &self.ability_description
    }

    /// Setup alterations this character causes, empty when none.
    #[inline]
    pub fn setup(&self) -> &str {
        &self.setup
    }

    /// Returns true if the character modifies the game setup.
    pub fn alters_setup(&self) -> bool {
        !self.setup.trim().is_empty()
    }
}
