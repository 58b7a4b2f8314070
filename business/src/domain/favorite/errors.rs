#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.user_id_empty")]
    UserIdEmpty,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
