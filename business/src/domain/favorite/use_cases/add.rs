use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::{ItemId, UserId};

pub struct AddFavoritesParams {
    pub user_id: UserId,
    pub item_ids: Vec<ItemId>,
}

#[async_trait]
pub trait AddFavoritesUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoritesParams) -> Result<(), FavoriteError>;
}
