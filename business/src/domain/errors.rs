/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// `NotFound` is only produced by lookups of a single row; set-returning
/// operations answer "nothing stored" with an empty collection instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    /// The store could not be reached (pool closed, acquire timeout, I/O).
    #[error("repository.unavailable")]
    Unavailable,
    /// The store was reached but the statement failed.
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
