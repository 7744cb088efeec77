use thiserror::Error;

#[derive(Debug, Error)]
pub enum AbError {
    /// The input line could not be turned into a command.
    #[error("{0}")]
    Parse(String),

    /// The command was well-formed but cannot run against the current model.
    #[error("{0}")]
    Command(String),

    #[error("{message}")]
    IllegalValue { message: String },

    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    #[error("The target person cannot be missing")]
    PersonNotFound,

    #[error("Operation would result in duplicate groups")]
    DuplicateGroup,

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Stored data is invalid: {0}")]
    DataConversion(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AbError {
    pub fn illegal_value(message: impl Into<String>) -> Self {
        AbError::IllegalValue {
            message: message.into(),
        }
    }

    /// Whether this error is meant to be shown to the user as plain feedback.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AbError::Parse(_) | AbError::Command(_) | AbError::IllegalValue { .. }
        )
    }
}

pub type AbResult<T> = Result<T, AbError>;
