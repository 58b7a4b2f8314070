#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.id_empty")]
    IdEmpty,
    #[error("item.not_found")]
    NotFound,
    #[error("item.invalid_coordinates")]
    InvalidCoordinates,
    #[error("item.search_failed")]
    SearchFailed,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
