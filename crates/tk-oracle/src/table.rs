//! Band tables: for each likelihood, the d100 ranges and their answers.
//!
//! Each table lists inclusive, ascending ranges that must cover 1-100
//! exactly once. [`validate_tables`] checks this and is meant to run at
//! startup.

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::likelihood::Likelihood;

/// A graded oracle answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OracleAnswer {
    /// Yes, with an extra boon.
    #[serde(rename = "Yes, and...")]
    YesAnd,
    /// Yes.
    #[serde(rename = "Yes")]
    Yes,
    /// Yes, with a complication.
    #[serde(rename = "Yes, but...")]
    YesBut,
    /// No, with a silver lining.
    #[serde(rename = "No, but...")]
    NoBut,
    /// No.
    #[serde(rename = "No")]
    No,
    /// No, and things get worse.
    #[serde(rename = "No, and...")]
    NoAnd,
}

impl OracleAnswer {
    /// Whether the answer is some form of yes.
    pub fn is_yes(self) -> bool {
        matches!(self, Self::YesAnd | Self::Yes | Self::YesBut)
    }
}

impl std::fmt::Display for OracleAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YesAnd => write!(f, "Yes, and..."),
            Self::Yes => write!(f, "Yes"),
            Self::YesBut => write!(f, "Yes, but..."),
            Self::NoBut => write!(f, "No, but..."),
            Self::No => write!(f, "No"),
            Self::NoAnd => write!(f, "No, and..."),
        }
    }
}

/// One row of a band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleBand {
    /// Lowest roll in the band.
    pub low: u32,
    /// Highest roll in the band.
    pub high: u32,
    /// The answer for rolls in the band.
    pub answer: OracleAnswer,
}

impl OracleBand {
    const fn new(low: u32, high: u32, answer: OracleAnswer) -> Self {
        Self { low, high, answer }
    }

    /// Whether `roll` falls inside this band.
    pub fn contains(&self, roll: u32) -> bool {
        (self.low..=self.high).contains(&roll)
    }

    /// Whether the band's answer is some form of yes.
    pub fn is_yes(&self) -> bool {
        self.answer.is_yes()
    }
}

use OracleAnswer::{No, NoAnd, NoBut, Yes, YesAnd, YesBut};

const IMPOSSIBLE: &[OracleBand] = &[OracleBand::new(1, 100, NoAnd)];

const NO_WAY: &[OracleBand] = &[
    OracleBand::new(1, 5, Yes),
    OracleBand::new(6, 95, No),
    OracleBand::new(96, 100, NoAnd),
];

const VERY_UNLIKELY: &[OracleBand] = &[
    OracleBand::new(1, 15, Yes),
    OracleBand::new(16, 20, YesBut),
    OracleBand::new(21, 25, NoBut),
    OracleBand::new(26, 90, No),
    OracleBand::new(91, 100, NoAnd),
];

const UNLIKELY: &[OracleBand] = &[
    OracleBand::new(1, 1, YesAnd),
    OracleBand::new(2, 35, Yes),
    OracleBand::new(36, 40, YesBut),
    OracleBand::new(41, 45, NoBut),
    OracleBand::new(46, 95, No),
    OracleBand::new(96, 100, NoAnd),
];

const FIFTY_FIFTY: &[OracleBand] = &[
    OracleBand::new(1, 2, YesAnd),
    OracleBand::new(3, 65, Yes),
    OracleBand::new(66, 70, YesBut),
    OracleBand::new(71, 75, NoBut),
    OracleBand::new(76, 98, No),
    OracleBand::new(99, 100, NoAnd),
];

const LIKELY: &[OracleBand] = &[
    OracleBand::new(1, 5, YesAnd),
    OracleBand::new(6, 75, Yes),
    OracleBand::new(76, 80, YesBut),
    OracleBand::new(81, 85, NoBut),
    OracleBand::new(86, 99, No),
    OracleBand::new(100, 100, NoAnd),
];

const VERY_LIKELY: &[OracleBand] = &[
    OracleBand::new(1, 10, YesAnd),
    OracleBand::new(11, 85, Yes),
    OracleBand::new(86, 90, YesBut),
    OracleBand::new(91, 94, NoBut),
    OracleBand::new(95, 99, No),
    OracleBand::new(100, 100, NoAnd),
];

const CERTAIN: &[OracleBand] = &[
    OracleBand::new(1, 95, Yes),
    OracleBand::new(96, 100, YesAnd),
];

const YES_SPECIAL: &[OracleBand] = &[OracleBand::new(1, 100, YesAnd)];

impl Likelihood {
    /// The ordered band table for this level.
    pub fn bands(self) -> &'static [OracleBand] {
        match self {
            Self::Impossible => IMPOSSIBLE,
            Self::NoWay => NO_WAY,
            Self::VeryUnlikely => VERY_UNLIKELY,
            Self::Unlikely => UNLIKELY,
            Self::FiftyFifty => FIFTY_FIFTY,
            Self::Likely => LIKELY,
            Self::VeryLikely => VERY_LIKELY,
            Self::Certain => CERTAIN,
            Self::YesSpecial => YES_SPECIAL,
        }
    }

    /// The first band containing `roll`, if any.
    pub fn band_for(self, roll: u32) -> Option<&'static OracleBand> {
        self.bands().iter().find(|b| b.contains(roll))
    }
}

/// Check that every likelihood's bands partition 1-100 with no gap or overlap.
pub fn validate_tables() -> OracleResult<()> {
    for &likelihood in Likelihood::all() {
        validate_bands(likelihood, likelihood.bands())?;
    }
    Ok(())
}

fn validate_bands(likelihood: Likelihood, bands: &[OracleBand]) -> OracleResult<()> {
    let mut next = 1;
    for band in bands {
        // A band must start exactly where the previous one ended and be non-empty.
        if band.low != next || band.high < band.low {
            return Err(OracleError::TableCoverage {
                likelihood,
                roll: next.min(band.low),
            });
        }
        next = band.high + 1;
    }
    if next != 101 {
        return Err(OracleError::TableCoverage {
            likelihood,
            roll: next,
        });
    }
    Ok(())
}
