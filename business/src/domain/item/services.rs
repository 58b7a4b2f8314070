use async_trait::async_trait;

use super::errors::ItemError;
use super::model::Item;
use super::value_objects::GeoPoint;

/// Service port for the external local-search provider.
///
/// Results come back ordered by the provider (relevance or distance) and with
/// categories already populated. Implementations fail with
/// `ItemError::SearchFailed` on transport or decoding errors.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, point: &GeoPoint, term: &str) -> Result<Vec<Item>, ItemError>;
}
