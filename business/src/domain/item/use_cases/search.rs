use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct SearchItemsParams {
    pub latitude: f64,
    pub longitude: f64,
    pub term: String,
}

#[async_trait]
pub trait SearchItemsUseCase: Send + Sync {
    async fn execute(&self, params: SearchItemsParams) -> Result<Vec<Item>, ItemError>;
}
