//! Percentile luck tests.
//!
//! A luck test rolls d100 against the character's raw Luck score; rolling
//! at or under the score is lucky.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tk_core::{Character, CoreStat};

use crate::dice::Die;
use crate::modifier::total_stat;

/// The result of a luck test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckTestResult {
    /// The d100 roll.
    pub roll: u32,
    /// The character's Luck score.
    pub target: i32,
    /// Whether the roll came in at or under the target.
    pub lucky: bool,
}

/// Roll d100 against `character`'s Luck.
pub fn luck_test<R: Rng>(character: &Character, rng: &mut R) -> LuckTestResult {
    let roll = Die::D100.roll(rng);
    let target = total_stat(character, CoreStat::Luck);
    LuckTestResult {
        roll,
        target,
        lucky: i64::from(roll) <= i64::from(target),
    }
}

impl std::fmt::Display for LuckTestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Luck Check: Rolled {} vs Target {} -> {}",
            self.roll,
            self.target,
            if self.lucky { "Lucky!" } else { "Unlucky" }
        )
    }
}
