use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;

pub struct GetFullNameParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetFullNameUseCase: Send + Sync {
    async fn execute(&self, params: GetFullNameParams) -> Result<String, UserError>;
}
