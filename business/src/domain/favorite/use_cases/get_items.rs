use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct GetFavoriteItemsParams {
    pub user_id: UserId,
}

/// Returns the user's favorited items that have a stored row, ordered by id.
/// Favorites pointing at unknown items are dropped, not reported.
#[async_trait]
pub trait GetFavoriteItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetFavoriteItemsParams) -> Result<Vec<Item>, FavoriteError>;
}
