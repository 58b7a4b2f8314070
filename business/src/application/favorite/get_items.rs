use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_items::{
    GetFavoriteItemsParams, GetFavoriteItemsUseCase,
};
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ItemId;

pub struct GetFavoriteItemsUseCaseImpl {
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoriteItemsUseCase for GetFavoriteItemsUseCaseImpl {
    async fn execute(&self, params: GetFavoriteItemsParams) -> Result<Vec<Item>, FavoriteError> {
        if params.user_id.is_blank() {
            return Err(FavoriteError::UserIdEmpty);
        }

        let item_ids: Vec<ItemId> = self
            .favorite_repository
            .get_item_ids(&params.user_id)
            .await?
            .into_iter()
            .collect();
        if item_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut items = self.item_repository.get_by_ids(&item_ids).await?;
        items.sort_by(|a, b| a.item_id.cmp(&b.item_id));
        items.dedup_by(|a, b| a.item_id == b.item_id);

        if items.len() < item_ids.len() {
            self.logger.warn(&format!(
                "User {} has {} favorites without a stored item",
                params.user_id,
                item_ids.len() - items.len()
            ));
        }
        Ok(items)
    }
}
