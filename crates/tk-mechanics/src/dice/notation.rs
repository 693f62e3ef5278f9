//! Dice notation parsing.

use std::fmt;
use std::str::FromStr;

use logos::Logos;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Die;
use super::roll::DiceRoll;
use crate::error::{MechError, MechResult};

/// Most dice a single notation may roll.
pub const MAX_DICE: u32 = 1000;

/// Lexical tokens of dice notation. Whitespace is removed before lexing,
/// so `1 0d6` reads as `10d6`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex("[0-9]+")]
    Number,

    #[regex("[dD]")]
    D,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

/// A parsed dice expression: `count` dice of one type plus a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceNotation {
    /// How many dice to roll (at least 1).
    pub count: u32,
    /// The die type.
    pub die: Die,
    /// Flat amount added to the sum of the dice.
    pub modifier: i32,
}

impl DiceNotation {
    /// Parse notation like `3d6+2`, `d20`, or `2D10 - 1`.
    ///
    /// Fails with [`MechError::InvalidNotation`] when the text does not match
    /// the grammar, and with [`MechError::UnsupportedDie`] when it does but the
    /// side count is not one of d4, d6, d8, d10, d12, d20, d100.
    pub fn parse(input: &str) -> MechResult<Self> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || MechError::InvalidNotation(input.to_string());

        let mut tokens = Vec::new();
        let mut lexer = RawToken::lexer(&compact);
        while let Some(result) = lexer.next() {
            let token = result.map_err(|()| invalid())?;
            tokens.push((token, lexer.slice()));
        }

        let mut rest = tokens.as_slice();

        // [count]
        let count = match rest {
            [(RawToken::Number, digits), tail @ ..] => {
                rest = tail;
                digits.parse::<u32>().map_err(|_| invalid())?
            }
            _ => 1,
        };

        // d<sides>
        let sides = match rest {
            [(RawToken::D, _), (RawToken::Number, digits), tail @ ..] => {
                rest = tail;
                digits.parse::<u32>().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        // [+/-modifier]
        let modifier = match rest {
            [] => 0,
            [(sign @ (RawToken::Plus | RawToken::Minus), _), (RawToken::Number, digits)] => {
                let magnitude = digits.parse::<i64>().map_err(|_| invalid())?;
                let signed = if *sign == RawToken::Minus {
                    -magnitude
                } else {
                    magnitude
                };
                i32::try_from(signed).map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        if count == 0 {
            return Err(MechError::InvalidNotation(format!(
                "{input} (dice count must be at least 1)"
            )));
        }
        if count > MAX_DICE {
            return Err(MechError::InvalidNotation(format!(
                "{input} (at most {MAX_DICE} dice)"
            )));
        }

        let die = Die::from_sides(sides).ok_or(MechError::UnsupportedDie(sides))?;

        Ok(Self {
            count,
            die,
            modifier,
        })
    }

    /// Smallest possible total.
    pub fn min_total(&self) -> i64 {
        i64::from(self.count) + i64::from(self.modifier)
    }

    /// Largest possible total.
    pub fn max_total(&self) -> i64 {
        i64::from(self.count) * i64::from(self.die.sides()) + i64::from(self.modifier)
    }

    /// Roll the dice and return the total. No clamping is applied.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> i64 {
        self.roll_detailed(rng).total
    }

    /// Roll the dice, keeping each face.
    pub fn roll_detailed<R: Rng>(&self, rng: &mut R) -> DiceRoll {
        let rolls: Vec<u32> = (0..self.count).map(|_| self.die.roll(rng)).collect();
        let total = rolls.iter().map(|&v| i64::from(v)).sum::<i64>() + i64::from(self.modifier);
        tracing::debug!(notation = %self, ?rolls, total, "rolled dice");
        DiceRoll {
            notation: *self,
            rolls,
            total,
        }
    }
}

impl FromStr for DiceNotation {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m => write!(f, "{m:+}"),
        }
    }
}
