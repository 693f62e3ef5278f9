//! Core types for Tablekit: characters, core stats, and rosters.
//!
//! This crate holds the plain data records the resolution engine reads.
//! Nothing here rolls dice; callers own and persist these records however
//! they like. A [`Roster`] is the JSON-backed store the CLI uses.

/// Characters, core stats, and stat blocks.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// JSON-backed character rosters.
pub mod roster;
/// Advisory validation of character records.
pub mod validate;

/// Re-export character types.
pub use character::{Character, CharacterKind, CoreStat, DEFAULT_STAT_VALUE, StatBlock};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export validation entry points.
pub use validate::{ValidationIssue, validate_character, validate_roster};
