use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};

/// An ordered collection of characters, stored on disk as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a roster from a JSON array of character records.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the roster as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a roster from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a roster, treating a missing file as an empty roster.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Write the roster to a JSON file, replacing any previous contents.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Add a character. Names must be unique (case-insensitive).
    pub fn add(&mut self, character: Character) -> CoreResult<()> {
        if self.find_by_name(&character.name).is_some() {
            return Err(CoreError::DuplicateName(character.name));
        }
        self.characters.push(character);
        Ok(())
    }

    /// Look up a character by exact id, then by case-insensitive name.
    pub fn find(&self, key: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.id == key)
            .or_else(|| self.find_by_name(key))
    }

    /// Like [`Roster::find`], but an unknown key is an error.
    pub fn get(&self, key: &str) -> CoreResult<&Character> {
        self.find(key)
            .ok_or_else(|| CoreError::UnknownCharacter(key.to_string()))
    }

    fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// All characters in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if the roster has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
