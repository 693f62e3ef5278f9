//! Text rendering of check results.
//!
//! Reports open with one of five fixed phrases (see
//! [`ComparisonOutcome::phrase`]) followed by the roll breakdown. Modifiers
//! always carry an explicit `+` or `-` sign.

use crate::check::{CheckVsDcResult, ComparisonOutcome, OpposedCheckResult, Resolution, RollDetails};

/// One side's roll: `Roll: 15 (d20) +2 (Strength Mod) = 17`.
pub fn format_roll_line(details: &RollDetails) -> String {
    let sign = if details.modifier >= 0 { '+' } else { '-' };
    format!(
        "Roll: {} (d20) {sign}{} ({} Mod) = {}",
        details.d20_roll,
        details.modifier.unsigned_abs(),
        details.stat,
        details.total
    )
}

/// `Success. (vs DC 15) Roll: 15 (d20) +2 (Strength Mod) = 17`
pub fn format_check(result: &CheckVsDcResult) -> String {
    format!(
        "{} (vs DC {}) {}",
        result.outcome.phrase(),
        result.dc,
        format_roll_line(&result.roll_details)
    )
}

/// The action name, then one indented roll line per participant.
pub fn format_opposed(result: &OpposedCheckResult) -> String {
    format!(
        "{} ({})\n  {} ({}): {}\n  {} ({}): {}",
        result.outcome.phrase(),
        result.encounter_action.name,
        result.initiator_name,
        result.initiator.stat,
        format_roll_line(&result.initiator),
        result.opponent_name,
        result.opponent.stat,
        format_roll_line(&result.opponent),
    )
}

/// Render any resolved check.
pub fn format_outcome(resolution: &Resolution) -> String {
    match resolution {
        Resolution::VsDc(r) => format_check(r),
        Resolution::Opposed(r) => format_opposed(r),
    }
}

impl std::fmt::Display for CheckVsDcResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_check(self))
    }
}

impl std::fmt::Display for OpposedCheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_opposed(self))
    }
}

/// All opening phrases a report can start with.
pub fn outcome_phrases() -> [&'static str; 5] {
    [
        ComparisonOutcome::CritSuccess.phrase(),
        ComparisonOutcome::Success.phrase(),
        ComparisonOutcome::Tie.phrase(),
        ComparisonOutcome::Failure.phrase(),
        ComparisonOutcome::CritFailure.phrase(),
    ]
}
