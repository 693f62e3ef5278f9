//! Error types for the resolution engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The dice string does not match `[count]d<sides>[+/-modifier]`.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// The notation is well-formed but names a die we do not roll.
    #[error("unsupported die: d{0} (supported: d4, d6, d8, d10, d12, d20, d100)")]
    UnsupportedDie(u32),

    /// An action was used in a way its configuration does not allow.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An encounter category name was not recognized.
    #[error("unknown encounter type: {0}")]
    UnknownEncounter(String),

    /// No action with the given name exists in the category.
    #[error("unknown action '{action}' in {encounter}")]
    UnknownAction {
        /// The encounter category searched.
        encounter: String,
        /// The action name that was not found.
        action: String,
    },

    /// A difficulty name was not recognized.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
