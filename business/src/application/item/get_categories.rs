use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_categories::{GetCategoriesParams, GetCategoriesUseCase};
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self, params: GetCategoriesParams) -> Result<BTreeSet<String>, ItemError> {
        let categories = self
            .repository
            .get_categories(&params.item_id)
            .await
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "Failed to fetch categories for {}: {}",
                    params.item_id, e
                ))
            })?;

        self.logger.debug(&format!(
            "Item {} has {} categories",
            params.item_id,
            categories.len()
        ));
        Ok(categories)
    }
}
