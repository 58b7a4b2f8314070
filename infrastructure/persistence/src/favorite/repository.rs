use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::{ItemId, UserId};

use crate::db::map_sqlx_error;

/// Favorites live in the `history` table, one row per (user_id, item_id).
pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_strings(item_ids: &[ItemId]) -> Vec<String> {
    item_ids.iter().map(|id| id.as_str().to_string()).collect()
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn add(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO history (user_id, item_id)
            SELECT $1, UNNEST($2::text[])
            ON CONFLICT DO NOTHING"#,
        )
        .bind(user_id.as_str())
        .bind(to_strings(item_ids))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("history.add", e))?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM history WHERE user_id = $1 AND item_id = ANY($2)")
            .bind(user_id.as_str())
            .bind(to_strings(item_ids))
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("history.remove", e))?;

        Ok(())
    }

    async fn get_item_ids(&self, user_id: &UserId) -> Result<BTreeSet<ItemId>, RepositoryError> {
        let item_ids =
            sqlx::query_scalar::<_, String>("SELECT item_id FROM history WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("history.get_item_ids", e))?;

        Ok(item_ids.into_iter().map(ItemId::from).collect())
    }
}
