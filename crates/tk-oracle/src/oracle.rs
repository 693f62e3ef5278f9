//! Consulting the oracle.

use rand::Rng;
use serde::Serialize;
use tk_mechanics::Die;

use crate::error::{OracleError, OracleResult};
use crate::likelihood::Likelihood;
use crate::table::OracleAnswer;

/// The answer to one oracle question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleOutcome {
    /// The likelihood that was consulted.
    pub likelihood: Likelihood,
    /// The d100 roll, 1-100.
    pub roll: u32,
    /// The graded answer.
    pub answer: OracleAnswer,
    /// Whether the answer is some form of yes.
    pub is_yes: bool,
    /// The display-only threshold for this likelihood.
    pub yes_threshold: u32,
}

impl std::fmt::Display for OracleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: rolled {} (yes <= {}) -> {}",
            self.likelihood, self.roll, self.yes_threshold, self.answer
        )
    }
}

/// Read the answer for a known likelihood and roll.
fn resolve(likelihood: Likelihood, roll: u32) -> OracleResult<OracleOutcome> {
    let band = likelihood
        .band_for(roll)
        .ok_or(OracleError::OutOfRangeRoll { likelihood, roll })?;
    Ok(OracleOutcome {
        likelihood,
        roll,
        answer: band.answer,
        is_yes: band.is_yes(),
        yes_threshold: likelihood.yes_threshold(),
    })
}

/// Roll d100 against a likelihood level.
pub fn consult_level<R: Rng>(likelihood: Likelihood, rng: &mut R) -> OracleResult<OracleOutcome> {
    let roll = Die::D100.roll(rng);
    let outcome = resolve(likelihood, roll).map_err(|_| OracleError::TableCoverage {
        likelihood,
        roll,
    })?;
    tracing::debug!(%likelihood, roll, answer = %outcome.answer, "oracle consulted");
    Ok(outcome)
}

/// Roll d100 against a likelihood label.
///
/// An unrecognized label is logged and answered as 50/50. The only failure
/// left is a broken band table, which [`crate::validate_tables`] rules out.
pub fn consult<R: Rng>(label: &str, rng: &mut R) -> OracleResult<OracleOutcome> {
    let likelihood = Likelihood::parse(label).unwrap_or_else(|| {
        tracing::warn!(label, fallback = %Likelihood::NEUTRAL, "unknown likelihood");
        Likelihood::NEUTRAL
    });
    consult_level(likelihood, rng)
}

/// Answer for a given likelihood label and roll, without rolling.
///
/// Unlike [`consult`], this rejects unknown labels and rolls outside 1-100.
pub fn consult_for_roll(label: &str, roll: u32) -> OracleResult<OracleOutcome> {
    let likelihood =
        Likelihood::parse(label).ok_or_else(|| OracleError::InvalidLikelihood(label.to_string()))?;
    resolve(likelihood, roll)
}
