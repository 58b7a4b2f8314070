use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::verify_login::{VerifyLoginParams, VerifyLoginUseCase};

pub struct VerifyLoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyLoginUseCase for VerifyLoginUseCaseImpl {
    async fn execute(&self, params: VerifyLoginParams) -> Result<bool, UserError> {
        let user = match self.repository.get_by_id(&params.user_id).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                self.logger.info(&format!("Login rejected for unknown user {}", params.user_id));
                return Ok(false);
            }
            Err(other) => return Err(UserError::Repository(other)),
        };

        if !user.password.is_well_formed() {
            self.logger.warn(&format!(
                "Stored credential for user {} is not a password hash",
                params.user_id
            ));
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let stored = user.password;
        let plain = params.password;
        let verified = tokio::task::spawn_blocking(move || stored.verify(&plain))
            .await
            .map_err(|e| {
                self.logger.error(&format!("Password verification task failed: {}", e));
                UserError::PasswordHashing
            })?;
        self.logger.info(&format!(
            "Login for user {}: {}",
            params.user_id,
            if verified { "accepted" } else { "rejected" }
        ));
        Ok(verified)
    }
}
