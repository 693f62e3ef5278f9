//! Advisory validation of character records.
//!
//! The engine never refuses to roll for an invalid character; missing or
//! odd stats fall back to defaults. These checks exist for editors and the
//! `validate` command, to surface data problems before play.

use std::collections::HashSet;

use serde::Serialize;

use crate::character::{Character, CoreStat};
use crate::roster::Roster;

/// Lowest stat value a well-formed character may have.
pub const MIN_STAT_VALUE: i32 = 1;
/// Highest stat value a well-formed character may have.
pub const MAX_STAT_VALUE: i32 = 20;
/// Longest allowed notes field, in characters.
pub const MAX_NOTE_LENGTH: usize = 500;

/// A problem found in a character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Name of the character the issue was found on.
    pub character: String,
    /// The offending field, e.g. `stats.Strength`.
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.character, self.field, self.message)
    }
}

/// Validate a single character record.
pub fn validate_character(character: &Character) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut push = |field: String, message: String| {
        issues.push(ValidationIssue {
            character: display_name(character),
            field,
            message,
        });
    };

    if character.id.trim().is_empty() {
        push("id".into(), "ID is required.".into());
    }
    if character.name.trim().is_empty() {
        push("name".into(), "Name is required.".into());
    }
    if character.health.is_none_or(|h| h < 0) {
        push(
            "health".into(),
            "Health must be a non-negative number.".into(),
        );
    }

    for stat in CoreStat::ALL {
        match character.stats.get(stat) {
            None => push(format!("stats.{stat}"), format!("{stat} is required.")),
            Some(v) if !(MIN_STAT_VALUE..=MAX_STAT_VALUE).contains(&v) => push(
                format!("stats.{stat}"),
                format!("{stat} must be between {MIN_STAT_VALUE} and {MAX_STAT_VALUE}."),
            ),
            Some(_) => {}
        }
    }

    if character
        .notes
        .as_ref()
        .is_some_and(|n| n.chars().count() > MAX_NOTE_LENGTH)
    {
        push(
            "notes".into(),
            format!("Notes cannot exceed {MAX_NOTE_LENGTH} characters."),
        );
    }

    issues
}

/// Validate every character in a roster, plus cross-record constraints.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for character in roster.characters() {
        issues.extend(validate_character(character));
        if !character.id.trim().is_empty() && !seen_ids.insert(character.id.as_str()) {
            issues.push(ValidationIssue {
                character: display_name(character),
                field: "id".into(),
                message: format!("duplicate id '{}'", character.id),
            });
        }
    }

    issues
}

fn display_name(character: &Character) -> String {
    if character.name.trim().is_empty() {
        "(unnamed)".to_string()
    } else {
        character.name.clone()
    }
}
