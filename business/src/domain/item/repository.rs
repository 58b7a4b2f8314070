use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ItemId;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns the item with its categories, or `NotFound`.
    async fn get_by_id(&self, item_id: &ItemId) -> Result<Item, RepositoryError>;

    /// Returns every stored item among `item_ids`; ids without a row are skipped.
    ///
    /// The default issues one lookup per id. Adapters that can batch should override it.
    async fn get_by_ids(&self, item_ids: &[ItemId]) -> Result<Vec<Item>, RepositoryError> {
        let mut items = Vec::with_capacity(item_ids.len());
        for item_id in item_ids {
            match self.get_by_id(item_id).await {
                Ok(item) => items.push(item),
                Err(RepositoryError::NotFound) => continue,
                Err(other) => return Err(other),
            }
        }
        Ok(items)
    }

    async fn get_categories(&self, item_id: &ItemId) -> Result<BTreeSet<String>, RepositoryError>;

    /// Inserts the item and its categories if absent. Existing rows are left untouched.
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
}
