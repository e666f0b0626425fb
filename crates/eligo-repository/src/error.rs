//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while fetching rule rows
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Backend temporarily unreachable; retried internally before surfacing
    #[error("row source unavailable: {0}")]
    Unavailable(String),

    /// Database error (when the postgres feature is enabled)
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generic error
    #[error("repository error: {0}")]
    Other(String),
}

impl RepositoryError {
    /// Whether retrying the operation can plausibly succeed.
    ///
    /// Connection-level failures are transient; everything else is
    /// terminal (retrying does not fix bad credentials or bad SQL).
    pub fn is_transient(&self) -> bool {
        match self {
            RepositoryError::Unavailable(_) => true,
            #[cfg(feature = "postgres")]
            RepositoryError::Database(err) => matches!(
                err,
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
            ),
            RepositoryError::Other(_) => false,
        }
    }
}
