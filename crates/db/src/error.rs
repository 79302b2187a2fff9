//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// An insert collided with an existing primary key.  Callers decide
    /// whether this is fatal; it is never retried here.
    #[error("employee {0} already exists")]
    DuplicateId(i32),
}

impl DbError {
    /// Classify an insert failure: a unique-constraint violation becomes
    /// [`DbError::DuplicateId`] carrying the offending id, anything else
    /// passes through as [`DbError::Sqlx`].
    pub(crate) fn from_insert(err: sqlx::Error, id: i32) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => DbError::DuplicateId(id),
            _ => DbError::Sqlx(err),
        }
    }

    /// True when this error is the duplicate-primary-key case.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DbError::DuplicateId(_))
    }
}
