use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the id (read) or no row was affected (update/delete).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A stored value violates a table constraint (e.g. negative price).
    #[error("{0}")]
    Constraint(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
