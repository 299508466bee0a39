//! Errors returned by record-store adapters.

use slotbook_core::error::CoreError;

/// Failure reported by a record-store or account-store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A named unique constraint (`uq_*`) rejected the write.
    #[error("Duplicate value violates unique constraint: {0}")]
    Duplicate(String),

    /// The backend could not be reached or returned an unexpected error.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Convenience alias for adapter return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    /// Classify a sqlx error.
    ///
    /// PostgreSQL unique violations (`23505`) on constraints named `uq_*`
    /// become [`StoreError::Duplicate`]; everything else is a backend error.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return StoreError::Duplicate(constraint.to_string());
                }
            }
        }
        StoreError::Backend(err.to_string())
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(constraint) => {
                CoreError::Conflict(format!("Duplicate value violates {constraint}"))
            }
            StoreError::Backend(msg) => CoreError::Store(msg),
        }
    }
}
