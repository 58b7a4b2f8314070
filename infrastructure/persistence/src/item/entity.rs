use std::collections::{BTreeSet, HashMap};

use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::ItemId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub item_id: String,
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub distance: Option<f64>,
}

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub item_id: String,
    pub category: String,
}

impl ItemEntity {
    pub fn into_domain(self, categories: BTreeSet<String>) -> Item {
        Item::from_repository(
            ItemId::new(self.item_id),
            self.name.unwrap_or_default(),
            self.rating.unwrap_or_default(),
            self.address.unwrap_or_default(),
            self.url.unwrap_or_default(),
            self.image_url.unwrap_or_default(),
            self.distance.unwrap_or_default(),
            categories,
        )
    }
}

/// Joins item rows with category rows fetched in a separate query.
/// Category rows for items that are not in `items` are ignored.
pub fn assemble(items: Vec<ItemEntity>, categories: Vec<CategoryEntity>) -> Vec<Item> {
    let mut by_item: HashMap<String, BTreeSet<String>> = HashMap::new();
    for row in categories {
        by_item.entry(row.item_id).or_default().insert(row.category);
    }

    items
        .into_iter()
        .map(|entity| {
            let categories = by_item.remove(&entity.item_id).unwrap_or_default();
            entity.into_domain(categories)
        })
        .collect()
}
