use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_full_name::{GetFullNameParams, GetFullNameUseCase};

pub struct GetFullNameUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFullNameUseCase for GetFullNameUseCaseImpl {
    async fn execute(&self, params: GetFullNameParams) -> Result<String, UserError> {
        self.logger.debug(&format!("Fetching full name for user {}", params.user_id));

        let user = self
            .repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        Ok(user.full_name())
    }
}
