use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::services::SearchProvider;
use crate::domain::item::use_cases::search::{SearchItemsParams, SearchItemsUseCase};
use crate::domain::item::value_objects::GeoPoint;
use crate::domain::logger::Logger;

pub struct SearchItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub provider: Arc<dyn SearchProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchItemsUseCase for SearchItemsUseCaseImpl {
    async fn execute(&self, params: SearchItemsParams) -> Result<Vec<Item>, ItemError> {
        let point = GeoPoint::new(params.latitude, params.longitude)?;
        self.logger.info(&format!(
            "Searching items near {} for term '{}'",
            point, params.term
        ));

        // Nothing is persisted unless the provider call succeeds as a whole.
        let items = self
            .provider
            .search(&point, &params.term)
            .await
            .inspect_err(|e| self.logger.error(&format!("Search provider failed: {}", e)))?;

        for item in &items {
            self.repository.save(item).await?;
        }

        self.logger.info(&format!("Search returned {} items", items.len()));
        Ok(items)
    }
}
