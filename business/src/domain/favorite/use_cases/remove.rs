use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::{ItemId, UserId};

pub struct RemoveFavoritesParams {
    pub user_id: UserId,
    pub item_ids: Vec<ItemId>,
}

#[async_trait]
pub trait RemoveFavoritesUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoritesParams) -> Result<(), FavoriteError>;
}
