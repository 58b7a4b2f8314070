use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;

pub struct VerifyLoginParams {
    pub user_id: UserId,
    pub password: String,
}

/// `Ok(false)` for an unknown user or a wrong password; `Err` only when the
/// store could not answer.
#[async_trait]
pub trait VerifyLoginUseCase: Send + Sync {
    async fn execute(&self, params: VerifyLoginParams) -> Result<bool, UserError>;
}
