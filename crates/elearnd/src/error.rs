//! Typed errors for the API handlers.

use thiserror::Error;

/// Errors a handler can produce before the serialization boundary turns
/// them into the wire envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or blank after trimming.
    #[error("{0}")]
    Validation(String),

    /// Unique-constraint violation on `users.username`.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// True when the error is a SQLite UNIQUE constraint violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) => {
            e.code == rusqlite::ErrorCode::ConstraintViolation
                && msg.as_deref().is_some_and(|m| m.contains("UNIQUE"))
        }
        _ => false,
    }
}
