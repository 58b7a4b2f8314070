use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::map_sqlx_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT user_id, password, first_name, last_name FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("users.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
