//! Error types for the Linknotes core library.

use thiserror::Error;

/// All errors that can occur within the Linknotes core library.
#[derive(Debug, Error)]
pub enum LinknotesError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A required field was missing when creating a link.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A link ID was requested that does not exist.
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// A gateway could not commit a create or update.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// The requested transition is not allowed in the current editor or form state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The opened file is not a valid Linknotes database.
    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`LinknotesError`].
pub type Result<T> = std::result::Result<T, LinknotesError>;

impl LinknotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::LinkNotFound(_) => "Link no longer exists".to_string(),
            Self::Persistence(msg) => format!("Failed to save: {msg}"),
            Self::InvalidState(msg) => msg.clone(),
            Self::InvalidDatabase(_) => "Could not open link database".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }

    /// Whether this error came from the storage layer rather than from the caller's input.
    ///
    /// Persistence failures leave the form or editor where it was so the user can resubmit.
    #[must_use]
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Persistence(_)
                | Self::InvalidDatabase(_)
                | Self::Io(_)
                | Self::Json(_)
        )
    }
}
