use crate::model::{INVALID_NOTE_ID, NOTE_TITLE_NULL, NO_CONTENT_ERROR};
use thiserror::Error;

/// Precondition violations, raised before any store work is scheduled.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("{}", NOTE_TITLE_NULL)]
    TitleRequired,
    #[error("{}", INVALID_NOTE_ID)]
    InvalidNoteId,
    #[error("{}", NO_CONTENT_ERROR)]
    ContentRequired,
    #[error("no note has been set")]
    NoteNotSet,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Split constraint failures out of a raw driver error.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            use sqlx::error::ErrorKind;
            match db_err.kind() {
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation => {
                    return StoreError::Constraint(db_err.message().to_string());
                }
                _ if db_err.message().contains("constraint failed") => {
                    return StoreError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}
