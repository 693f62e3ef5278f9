//! Error types for the oracle.

use thiserror::Error;

use crate::likelihood::Likelihood;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur when consulting the oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Invalid likelihood string.
    #[error("invalid likelihood: {0}")]
    InvalidLikelihood(String),

    /// The roll lies outside 1-100, so no band covers it.
    #[error("no result found for roll {roll} at likelihood {likelihood}")]
    OutOfRangeRoll {
        /// The likelihood consulted.
        likelihood: Likelihood,
        /// The offending roll.
        roll: u32,
    },

    /// A band table leaves a value uncovered or covers it twice.
    #[error("band table for {likelihood} does not partition 1-100 at roll {roll}")]
    TableCoverage {
        /// The likelihood whose table is broken.
        likelihood: Likelihood,
        /// The first roll that is missing or doubly covered.
        roll: u32,
    },
}
