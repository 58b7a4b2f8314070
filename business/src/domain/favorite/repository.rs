use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemId, UserId};

/// Persistence port for the user/item favorites association.
///
/// Pairs are unique and unordered. No check is made that an item id refers to
/// a stored item.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts each pair, ignoring pairs that already exist.
    async fn add(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError>;
    /// Deletes each pair if present.
    async fn remove(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError>;
    async fn get_item_ids(&self, user_id: &UserId) -> Result<BTreeSet<ItemId>, RepositoryError>;
}
