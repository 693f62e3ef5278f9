/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or manipulating character records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No character matched the given name or id.
    #[error("character not found: \"{0}\"")]
    UnknownCharacter(String),

    /// A character with the same name already exists in the roster.
    #[error("character already exists: \"{0}\"")]
    DuplicateName(String),

    /// A core stat name could not be recognized.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A character kind could not be recognized.
    #[error("unknown character kind: {0}")]
    UnknownKind(String),

    /// The roster file could not be read or written.
    #[error("roster i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The roster file is not valid JSON for a character list.
    #[error("roster format: {0}")]
    Json(#[from] serde_json::Error),
}
