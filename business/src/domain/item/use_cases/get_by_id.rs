use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ItemId;

pub struct GetItemByIdParams {
    pub item_id: ItemId,
}

#[async_trait]
pub trait GetItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError>;
}
