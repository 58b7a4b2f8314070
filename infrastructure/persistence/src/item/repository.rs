use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shared::value_objects::ItemId;

use super::entity::{CategoryEntity, ItemEntity, assemble};
use crate::db::map_sqlx_error;

const SELECT_ITEM_COLUMNS: &str =
    "SELECT item_id, name, rating, address, url, image_url, distance FROM items";

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn get_by_id(&self, item_id: &ItemId) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "{} WHERE item_id = $1",
            SELECT_ITEM_COLUMNS
        ))
        .bind(item_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("items.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        let categories = self.get_categories(item_id).await?;
        Ok(entity.into_domain(categories))
    }

    /// Two round trips regardless of how many ids are requested.
    async fn get_by_ids(&self, item_ids: &[ItemId]) -> Result<Vec<Item>, RepositoryError> {
        if item_ids.is_empty() {
            return Ok(vec![]);
        }
        let ids: Vec<String> = item_ids.iter().map(|id| id.as_str().to_string()).collect();
        debug!(count = ids.len(), "batched item lookup");

        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "{} WHERE item_id = ANY($1) ORDER BY item_id",
            SELECT_ITEM_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("items.get_by_ids", e))?;

        if entities.is_empty() {
            return Ok(vec![]);
        }

        let categories = sqlx::query_as::<_, CategoryEntity>(
            "SELECT item_id, category FROM categories WHERE item_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("categories.get_by_item_ids", e))?;

        Ok(assemble(entities, categories))
    }

    async fn get_categories(&self, item_id: &ItemId) -> Result<BTreeSet<String>, RepositoryError> {
        let categories =
            sqlx::query_scalar::<_, String>("SELECT category FROM categories WHERE item_id = $1")
                .bind(item_id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("categories.get_by_item_id", e))?;

        Ok(categories.into_iter().collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("items.save.begin", e))?;

        // Same column order as the items table.
        let inserted = sqlx::query(
            r#"INSERT INTO items (item_id, name, rating, address, url, image_url, distance)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (item_id) DO NOTHING"#,
        )
        .bind(item.item_id.as_str())
        .bind(&item.name)
        .bind(item.rating)
        .bind(&item.address)
        .bind(&item.url)
        .bind(&item.image_url)
        .bind(item.distance)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("items.save", e))?
        .rows_affected();

        if !item.categories.is_empty() {
            let categories: Vec<String> = item.categories.iter().cloned().collect();
            sqlx::query(
                r#"INSERT INTO categories (item_id, category)
                SELECT $1, UNNEST($2::text[])
                ON CONFLICT DO NOTHING"#,
            )
            .bind(item.item_id.as_str())
            .bind(&categories)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("categories.save", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("items.save.commit", e))?;

        debug!(
            item_id = item.item_id.as_str(),
            inserted = inserted > 0,
            "item saved"
        );
        Ok(())
    }
}
