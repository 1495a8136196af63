//! Script - the edition list characters are created from.
//!
//! A script interns characters by name and hands out `Arc<Character>`
//! handles, so every player holding "Washerwoman" points at the same
//! descriptor. Lookups are case-insensitive.

mod trouble_brewing;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::types::RoleType;

/// An ordered registry of characters available in a game.
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    characters: Vec<Arc<Character>>,
    by_name: HashMap<String, usize>,
}

/// On-disk form of a script.
#[derive(Debug, Serialize, Deserialize)]
struct ScriptFile {
    name: String,
    characters: Vec<Character>,
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Script {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characters: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// The Trouble Brewing base edition.
    pub fn trouble_brewing() -> Self {
        trouble_brewing::script()
    }

    /// Build a script from a list of characters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if two characters share a name.
    pub fn from_characters(
        name: impl Into<String>,
        characters: impl IntoIterator<Item = Character>,
    ) -> Result<Self, DomainError> {
        let mut script = Self::new(name);
        for character in characters {
            script.add(character)?;
        }
        Ok(script)
    }

    /// Parse a script from JSON of the form `{"name": ..., "characters": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for malformed JSON or unknown enum values,
    /// and `DomainError::Constraint` for duplicate character names.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let file: ScriptFile = serde_json::from_str(json)
            .map_err(|e| DomainError::parse(format!("Invalid script JSON: {}", e)))?;
        Self::from_characters(file.name, file.characters)
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        let file = ScriptFile {
            name: self.name.clone(),
            characters: self.characters.iter().map(|c| (**c).clone()).collect(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| DomainError::parse(format!("Could not serialize script: {}", e)))
    }

    /// Builder form of [`Script::add`].
    pub fn with_character(mut self, character: Character) -> Result<Self, DomainError> {
        self.add(character)?;
        Ok(self)
    }

    /// Intern a character and return the shared handle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if a character with the same name
    /// (ignoring case) is already present.
    pub fn add(&mut self, character: Character) -> Result<Arc<Character>, DomainError> {
        let key = lookup_key(character.name().as_str());
        if self.by_name.contains_key(&key) {
            return Err(DomainError::constraint(format!(
                "Character '{}' is already in script '{}'",
                character.name(),
                self.name
            )));
        }
        let character = Arc::new(character);
        self.by_name.insert(key, self.characters.len());
        self.characters.push(Arc::clone(&character));
        Ok(character)
    }

    /// Intern a character from a built-in table whose names are known to be unique.
    fn push_trusted(&mut self, character: Character) {
        self.by_name
            .insert(lookup_key(character.name().as_str()), self.characters.len());
        self.characters.push(Arc::new(character));
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<Arc<Character>> {
        self.by_name
            .get(&lookup_key(name))
            .map(|&idx| Arc::clone(&self.characters[idx]))
    }

    /// Like [`Script::get`] but a missing character is an error.
    pub fn require(&self, name: &str) -> Result<Arc<Character>, DomainError> {
        self.get(name)
            .ok_or_else(|| DomainError::not_found("Character", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&lookup_key(name))
    }

    /// All characters in the order they were added.
    pub fn characters(&self) -> &[Arc<Character>] {
        &self.characters
    }

    pub fn of_type(&self, role_type: RoleType) -> impl Iterator<Item = &Arc<Character>> + '_ {
        self.characters
            .iter()
            .filter(move |c| c.role_type() == role_type)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
