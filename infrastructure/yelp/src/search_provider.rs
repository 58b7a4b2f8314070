use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use business::domain::item::errors::ItemError;
use business::domain::item::model::{Item, NewItemProps};
use business::domain::item::services::SearchProvider;
use business::domain::item::value_objects::GeoPoint;
use business::domain::shared::value_objects::ItemId;

use crate::client::YelpClient;

pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

#[derive(Deserialize)]
struct SearchResponse {
    businesses: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct Business {
    id: String,
    name: Option<String>,
    rating: Option<f64>,
    distance: Option<f64>,
    url: Option<String>,
    image_url: Option<String>,
    categories: Option<Vec<BusinessCategory>>,
    location: Option<BusinessLocation>,
}

#[derive(Deserialize)]
struct BusinessCategory {
    title: String,
}

#[derive(Deserialize)]
struct BusinessLocation {
    display_address: Option<Vec<String>>,
}

pub struct YelpSearchProvider {
    client: YelpClient,
    limit: u32,
}

impl YelpSearchProvider {
    pub fn new(client: YelpClient, limit: u32) -> Self {
        Self { client, limit }
    }

    fn query_params(&self, point: &GeoPoint, term: &str) -> Vec<(&'static str, String)> {
        vec![
            ("term", term.trim().to_string()),
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Converts a search payload into items, keeping the provider's order.
    ///
    /// Businesses are decoded one at a time so a single malformed entry is
    /// skipped rather than failing the whole search.
    fn parse_response(body: &str) -> Result<Vec<Item>, ItemError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|_| ItemError::SearchFailed)?;

        Ok(response
            .businesses
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| {
                let business = serde_json::from_value::<Business>(raw)
                    .inspect_err(|e| warn!(error = %e, "skipping malformed business"))
                    .ok()?;
                Self::to_item(business)
                    .inspect_err(|e| warn!(error = %e, "skipping business without a usable id"))
                    .ok()
            })
            .collect())
    }

    fn to_item(business: Business) -> Result<Item, ItemError> {
        let address = business
            .location
            .and_then(|l| l.display_address)
            .map(|lines| lines.join(","))
            .unwrap_or_default();

        Item::new(NewItemProps {
            item_id: ItemId::new(business.id),
            name: business.name.unwrap_or_default(),
            rating: business.rating.unwrap_or_default(),
            address,
            categories: business
                .categories
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.title)
                .collect(),
            image_url: business.image_url.unwrap_or_default(),
            url: business.url.unwrap_or_default(),
            distance: business.distance.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl SearchProvider for YelpSearchProvider {
    async fn search(&self, point: &GeoPoint, term: &str) -> Result<Vec<Item>, ItemError> {
        debug!(%point, term, limit = self.limit, "calling yelp business search");

        let response = self
            .client
            .client
            .get(self.client.business_search_url())
            .header("Authorization", self.client.auth_header())
            .query(&self.query_params(point, term))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "yelp request failed");
                ItemError::SearchFailed
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "yelp returned an error status");
            return Err(ItemError::SearchFailed);
        }

        let body = response.text().await.map_err(|_| ItemError::SearchFailed)?;
        Self::parse_response(&body)
    }
}
