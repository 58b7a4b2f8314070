use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use crate::domain::logger::Logger;

pub struct SaveItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveItemUseCase for SaveItemUseCaseImpl {
    async fn execute(&self, params: SaveItemParams) -> Result<(), ItemError> {
        let item = params.item;
        if item.item_id.is_blank() {
            return Err(ItemError::IdEmpty);
        }

        self.logger.info(&format!(
            "Saving item {} with {} categories",
            item.item_id,
            item.categories.len()
        ));
        self.repository.save(&item).await?;
        Ok(())
    }
}
