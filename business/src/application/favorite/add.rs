use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoritesParams, AddFavoritesUseCase};
use crate::domain::logger::Logger;

pub struct AddFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoritesUseCase for AddFavoritesUseCaseImpl {
    async fn execute(&self, params: AddFavoritesParams) -> Result<(), FavoriteError> {
        if params.user_id.is_blank() {
            return Err(FavoriteError::UserIdEmpty);
        }
        if params.item_ids.is_empty() {
            return Ok(());
        }

        self.logger.info(&format!(
            "Adding {} favorites for user {}",
            params.item_ids.len(),
            params.user_id
        ));
        self.repository
            .add(&params.user_id, &params.item_ids)
            .await?;
        Ok(())
    }
}
