//! Dice notation, dice types, and rolling.
//!
//! Notation is `[count]d<sides>[+/-modifier]`, e.g. `3d6+2`, `d20`, `d100`.
//! Whitespace anywhere in the string is ignored. Only the standard
//! polyhedral set (d4 through d100) is supported.

pub mod notation;
pub mod roll;

pub use notation::DiceNotation;
pub use roll::DiceRoll;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MechResult;

/// A supported polyhedral die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// The die with the given number of sides, if it is supported.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            _ => None,
        }
    }

    /// Roll this die once, uniformly over `1..=sides`.
    pub fn roll<R: Rng>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Parse `notation` and roll it once, returning the total.
pub fn roll<R: Rng>(notation: &str, rng: &mut R) -> MechResult<i64> {
    Ok(DiceNotation::parse(notation)?.roll(rng))
}

/// Parse `notation` and roll it once, keeping the individual faces.
pub fn roll_detailed<R: Rng>(notation: &str, rng: &mut R) -> MechResult<DiceRoll> {
    Ok(DiceNotation::parse(notation)?.roll_detailed(rng))
}

/// Roll `notation` `times` times independently.
///
/// Each entry is a full roll of the notation, not one die of a larger pool.
pub fn roll_multiple<R: Rng>(notation: &str, times: usize, rng: &mut R) -> MechResult<Vec<i64>> {
    let parsed = DiceNotation::parse(notation)?;
    Ok((0..times).map(|_| parsed.roll(rng)).collect())
}
