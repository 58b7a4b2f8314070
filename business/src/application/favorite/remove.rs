use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoritesParams, RemoveFavoritesUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoritesUseCase for RemoveFavoritesUseCaseImpl {
    async fn execute(&self, params: RemoveFavoritesParams) -> Result<(), FavoriteError> {
        if params.user_id.is_blank() {
            return Err(FavoriteError::UserIdEmpty);
        }
        if params.item_ids.is_empty() {
            return Ok(());
        }

        self.logger.info(&format!(
            "Removing {} favorites for user {}",
            params.item_ids.len(),
            params.user_id
        ));
        self.repository
            .remove(&params.user_id, &params.item_ids)
            .await?;
        Ok(())
    }
}
