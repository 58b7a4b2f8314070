use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the user, or `NotFound`.
    async fn get_by_id(&self, user_id: &UserId) -> Result<User, RepositoryError>;
}
