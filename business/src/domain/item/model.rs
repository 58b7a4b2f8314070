use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::errors::ItemError;
use crate::domain::shared::value_objects::ItemId;

/// A place returned by the search provider and cached in the store.
///
/// Items are immutable once built: the store only ever inserts them, never
/// updates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub name: String,
    pub rating: f64,
    pub address: String,
    pub categories: BTreeSet<String>,
    pub image_url: String,
    pub url: String,
    pub distance: f64,
}

pub struct NewItemProps {
    pub item_id: ItemId,
    pub name: String,
    pub rating: f64,
    pub address: String,
    pub categories: Vec<String>,
    pub image_url: String,
    pub url: String,
    pub distance: f64,
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        if props.item_id.is_blank() {
            return Err(ItemError::IdEmpty);
        }

        Ok(Self {
            item_id: props.item_id,
            name: props.name,
            rating: props.rating,
            address: props.address,
            categories: props.categories.into_iter().collect(),
            image_url: props.image_url,
            url: props.url,
            distance: props.distance,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        item_id: ItemId,
        name: String,
        rating: f64,
        address: String,
        url: String,
        image_url: String,
        distance: f64,
        categories: BTreeSet<String>,
    ) -> Self {
        Self {
            item_id,
            name,
            rating,
            address,
            categories,
            image_url,
            url,
            distance,
        }
    }
}
