//! d20 checks: rolling a stat, grading the roll against a target, and the
//! check flavours built on top of that (vs a DC, opposed, luck tests).
//!
//! Grading follows a fixed priority: a natural 20 is a critical success and
//! a natural 1 a critical failure whatever the total; otherwise the total is
//! compared numerically, with equality reported as a tie.

pub mod difficulty;
pub mod luck;
pub mod opposed;

pub use difficulty::Difficulty;
pub use luck::{LuckTestResult, luck_test};
pub use opposed::{OpposedCheckResult, resolve_opposed_check};

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tk_core::{Character, CoreStat};

use crate::dice::Die;
use crate::encounter::{ActionMode, EncounterAction};
use crate::error::{MechError, MechResult};
use crate::modifier::{stat_modifier, total_stat};

/// One resolved d20 roll for a stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollDetails {
    /// The stat rolled against.
    pub stat: CoreStat,
    /// The character's raw value for the stat.
    pub stat_value: i32,
    /// Modifier derived from `stat_value`.
    pub modifier: i32,
    /// The natural d20 face (1-20).
    pub d20_roll: u32,
    /// `d20_roll + modifier`.
    pub total: i32,
}

impl RollDetails {
    /// Build details from a known natural roll.
    pub fn new(stat: CoreStat, stat_value: i32, d20_roll: u32) -> Self {
        let modifier = stat_modifier(stat_value);
        Self {
            stat,
            stat_value,
            modifier,
            d20_roll,
            total: d20_roll as i32 + modifier,
        }
    }

    /// True for a natural 20.
    pub fn is_natural_max(&self) -> bool {
        self.d20_roll == 20
    }

    /// True for a natural 1.
    pub fn is_natural_min(&self) -> bool {
        self.d20_roll == 1
    }
}

/// The graded result of comparing a roll to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOutcome {
    /// Natural 20.
    #[serde(rename = "Critical Success")]
    CritSuccess,
    /// Total above the target.
    Success,
    /// Total equal to the target.
    Tie,
    /// Total below the target.
    Failure,
    /// Natural 1.
    #[serde(rename = "Critical Failure")]
    CritFailure,
}

impl ComparisonOutcome {
    /// The fixed phrase that opens a rendered report.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::CritSuccess => "Critical Success!",
            Self::Success => "Success.",
            Self::Tie => "Tie.",
            Self::Failure => "Failure.",
            Self::CritFailure => "Critical Failure!",
        }
    }
}

impl std::fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CritSuccess => write!(f, "Critical Success"),
            Self::Success => write!(f, "Success"),
            Self::Tie => write!(f, "Tie"),
            Self::Failure => write!(f, "Failure"),
            Self::CritFailure => write!(f, "Critical Failure"),
        }
    }
}

/// Grade a roll against a target value (a DC or an opponent's total).
pub fn determine_outcome(details: &RollDetails, target: i32) -> ComparisonOutcome {
    if details.is_natural_max() {
        ComparisonOutcome::CritSuccess
    } else if details.is_natural_min() {
        ComparisonOutcome::CritFailure
    } else {
        match details.total.cmp(&target) {
            Ordering::Greater => ComparisonOutcome::Success,
            Ordering::Less => ComparisonOutcome::Failure,
            Ordering::Equal => ComparisonOutcome::Tie,
        }
    }
}

/// Roll a d20 for `character` using `stat`.
pub fn simulate_check<R: Rng>(character: &Character, stat: CoreStat, rng: &mut R) -> RollDetails {
    let d20_roll = Die::D20.roll(rng);
    let details = RollDetails::new(stat, total_stat(character, stat), d20_roll);
    tracing::debug!(
        character = %character.name,
        %stat,
        d20 = details.d20_roll,
        modifier = details.modifier,
        total = details.total,
        "simulated check"
    );
    details
}

/// The result of a check against a fixed Difficulty Class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVsDcResult {
    /// The graded outcome.
    pub outcome: ComparisonOutcome,
    /// The roll that was graded.
    pub roll_details: RollDetails,
    /// The target the roll was graded against.
    pub dc: i32,
}

/// Roll `stat` for `character` and grade it against `dc`.
pub fn skill_check_vs_dc<R: Rng>(
    character: &Character,
    stat: CoreStat,
    dc: i32,
    rng: &mut R,
) -> CheckVsDcResult {
    let roll_details = simulate_check(character, stat, rng);
    let outcome = determine_outcome(&roll_details, dc);
    CheckVsDcResult {
        outcome,
        roll_details,
        dc,
    }
}

/// Run a fixed-target catalog action.
///
/// Fails with [`MechError::Configuration`] when the action is an opposed one;
/// it is never silently downgraded to a DC check.
pub fn resolve_action_vs_dc<R: Rng>(
    character: &Character,
    action: &EncounterAction,
    dc: i32,
    rng: &mut R,
) -> MechResult<CheckVsDcResult> {
    match action.mode {
        ActionMode::VsDc => Ok(skill_check_vs_dc(character, action.primary_stat, dc, rng)),
        ActionMode::Opposed { .. } => Err(MechError::Configuration(format!(
            "action \"{}\" is an opposed check and needs an opponent",
            action.name
        ))),
    }
}

/// Either kind of resolved check, for callers that handle both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resolution {
    /// A check against a fixed DC.
    VsDc(CheckVsDcResult),
    /// A contest between two characters.
    Opposed(OpposedCheckResult),
}

impl Resolution {
    /// The graded outcome, from the acting character's side.
    pub fn outcome(&self) -> ComparisonOutcome {
        match self {
            Self::VsDc(r) => r.outcome,
            Self::Opposed(r) => r.outcome,
        }
    }
}

impl From<CheckVsDcResult> for Resolution {
    fn from(r: CheckVsDcResult) -> Self {
        Self::VsDc(r)
    }
}

impl From<OpposedCheckResult> for Resolution {
    fn from(r: OpposedCheckResult) -> Self {
        Self::Opposed(r)
    }
}
