use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::value_objects::ItemId;

pub struct GetCategoriesParams {
    pub item_id: ItemId,
}

/// An empty set means the item has no stored categories; a failed store is an error.
#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoriesParams) -> Result<BTreeSet<String>, ItemError>;
}
