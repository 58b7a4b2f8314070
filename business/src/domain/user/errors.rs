#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.not_found")]
    NotFound,
    #[error("user.password_hashing_failed")]
    PasswordHashing,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
