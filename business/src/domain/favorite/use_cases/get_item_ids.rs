use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::{ItemId, UserId};

pub struct GetFavoriteItemIdsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetFavoriteItemIdsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFavoriteItemIdsParams,
    ) -> Result<BTreeSet<ItemId>, FavoriteError>;
}
