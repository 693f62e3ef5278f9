//! Standard Difficulty Classes.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A named Difficulty Class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// DC 5.
    VeryEasy,
    /// DC 10.
    Easy,
    /// DC 15.
    Medium,
    /// DC 20.
    Hard,
    /// DC 25.
    VeryHard,
    /// DC 30.
    NearlyImpossible,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Difficulty; 6] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
        Self::NearlyImpossible,
    ];

    /// The numeric DC.
    pub fn dc(self) -> i32 {
        match self {
            Self::VeryEasy => 5,
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
            Self::VeryHard => 25,
            Self::NearlyImpossible => 30,
        }
    }

    /// Parse a difficulty name, ignoring case, spaces, dashes, and underscores.
    pub fn parse(s: &str) -> MechResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "veryeasy" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "veryhard" => Ok(Self::VeryHard),
            "nearlyimpossible" => Ok(Self::NearlyImpossible),
            _ => Err(MechError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::NearlyImpossible => "Nearly Impossible",
        };
        write!(f, "{name} (DC {})", self.dc())
    }
}
