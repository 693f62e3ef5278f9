//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::notation::DiceNotation;

/// The outcome of rolling one dice notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// What was rolled.
    pub notation: DiceNotation,
    /// Individual die faces, in roll order.
    pub rolls: Vec<u32>,
    /// Sum of the faces plus the modifier.
    pub total: i64,
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "{}: [{}]", self.notation, values.join(", "))?;
        if self.notation.modifier != 0 {
            write!(f, " {:+}", self.notation.modifier)?;
        }
        write!(f, " = {}", self.total)
    }
}
