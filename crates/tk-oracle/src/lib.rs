//! Likelihood oracle for yes/no questions.
//!
//! The player picks how likely a "Yes" seems, the oracle rolls d100 and reads
//! the answer off that likelihood's band table. Answers are graded: a plain
//! Yes or No, or one qualified with "and..." or "but...".

pub mod error;
pub mod likelihood;
pub mod oracle;
pub mod table;

pub use error::{OracleError, OracleResult};
pub use likelihood::Likelihood;
pub use oracle::{OracleOutcome, consult, consult_for_roll, consult_level};
pub use table::{OracleAnswer, OracleBand, validate_tables};
