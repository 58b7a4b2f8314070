use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct SaveItemParams {
    pub item: Item,
}

#[async_trait]
pub trait SaveItemUseCase: Send + Sync {
    async fn execute(&self, params: SaveItemParams) -> Result<(), ItemError>;
}
