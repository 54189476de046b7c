use rolodex_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Error returned by every repository operation.
///
/// Domain outcomes (missing rows, uniqueness conflicts, rejected arguments)
/// arrive as [`CoreError`]; anything else the driver reports stays a
/// [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Convenience alias for repository return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    /// Unique violations on a known `uq_*` constraint become
    /// [`CoreError::Conflict`]; everything else is kept as a database error.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                if let Some(message) = db_err.constraint().and_then(conflict_message) {
                    return StoreError::Core(CoreError::Conflict(message.to_string()));
                }
            }
        }
        StoreError::Database(err)
    }
}

/// Human-readable message for a violated uniqueness constraint.
fn conflict_message(constraint: &str) -> Option<&'static str> {
    match constraint {
        "uq_categories_label" => Some("A category with this label already exists"),
        "uq_contacts_email" => Some("A contact with this email already exists"),
        _ => None,
    }
}
