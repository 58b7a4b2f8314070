use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_item_ids::{
    GetFavoriteItemIdsParams, GetFavoriteItemIdsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ItemId;

pub struct GetFavoriteItemIdsUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoriteItemIdsUseCase for GetFavoriteItemIdsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFavoriteItemIdsParams,
    ) -> Result<BTreeSet<ItemId>, FavoriteError> {
        if params.user_id.is_blank() {
            return Err(FavoriteError::UserIdEmpty);
        }

        let item_ids = self.repository.get_item_ids(&params.user_id).await?;
        self.logger.debug(&format!(
            "User {} has {} favorites",
            params.user_id,
            item_ids.len()
        ));
        Ok(item_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::favorite::add::AddFavoritesUseCaseImpl;
    use crate::application::favorite::remove::RemoveFavoritesUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::favorite::use_cases::add::{AddFavoritesParams, AddFavoritesUseCase};
    use crate::domain::favorite::use_cases::remove::{
        RemoveFavoritesParams, RemoveFavoritesUseCase,
    };
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use proptest::prelude::*;
    use std::sync::Mutex;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn add(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError>;
            async fn get_item_ids(&self, user_id: &UserId) -> Result<BTreeSet<ItemId>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    /// Behaves like the `history` table: a set of unique pairs.
    #[derive(Default)]
    struct InMemoryFavorites(Mutex<BTreeSet<(UserId, ItemId)>>);

    #[async_trait]
    impl FavoriteRepository for InMemoryFavorites {
        async fn add(&self, user_id: &UserId, item_ids: &[ItemId]) -> Result<(), RepositoryError> {
            let mut pairs = self.0.lock().unwrap();
            for item_id in item_ids {
                pairs.insert((user_id.clone(), item_id.clone()));
            }
            Ok(())
        }

        async fn remove(
            &self,
            user_id: &UserId,
            item_ids: &[ItemId],
        ) -> Result<(), RepositoryError> {
            let mut pairs = self.0.lock().unwrap();
            for item_id in item_ids {
                pairs.remove(&(user_id.clone(), item_id.clone()));
            }
            Ok(())
        }

        async fn get_item_ids(
            &self,
            user_id: &UserId,
        ) -> Result<BTreeSet<ItemId>, RepositoryError> {
            let pairs = self.0.lock().unwrap();
            Ok(pairs
                .iter()
                .filter(|(u, _)| u == user_id)
                .map(|(_, i)| i.clone())
                .collect())
        }
    }

    #[tokio::test]
    async fn should_return_empty_set_when_user_has_no_favorites() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_get_item_ids()
            .returning(|_| Ok(BTreeSet::new()));

        let use_case = GetFavoriteItemIdsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let ids = use_case
            .execute(GetFavoriteItemIdsParams {
                user_id: UserId::new("u1"),
            })
            .await
            .unwrap();

        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn should_return_error_rather_than_empty_set_when_store_fails() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_get_item_ids()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = GetFavoriteItemIdsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetFavoriteItemIdsParams {
                user_id: UserId::new("u1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            FavoriteError::Repository(RepositoryError::Unavailable)
        ));
    }

    fn item_ids(raw: &[String]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::new(s.as_str())).collect()
    }

    proptest! {
        #[test]
        fn should_contain_added_ids_and_exclude_removed_ids(
            added in proptest::collection::vec("[a-z0-9]{1,4}", 0..12),
            removed in proptest::collection::vec("[a-z0-9]{1,4}", 0..12),
        ) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let repository: Arc<dyn FavoriteRepository> = Arc::new(InMemoryFavorites::default());
                let user_id = UserId::new("u1");
                let add = AddFavoritesUseCaseImpl { repository: repository.clone(), logger: mock_logger() };
                let remove = RemoveFavoritesUseCaseImpl { repository: repository.clone(), logger: mock_logger() };
                let get = GetFavoriteItemIdsUseCaseImpl { repository, logger: mock_logger() };

                // Adding twice must behave like adding once.
                for _ in 0..2 {
                    add.execute(AddFavoritesParams { user_id: user_id.clone(), item_ids: item_ids(&added) })
                        .await
                        .unwrap();
                }
                let after_add = get
                    .execute(GetFavoriteItemIdsParams { user_id: user_id.clone() })
                    .await
                    .unwrap();
                for id in item_ids(&added) {
                    assert!(after_add.contains(&id));
                }
                assert_eq!(after_add.len(), added.iter().collect::<BTreeSet<_>>().len());

                remove
                    .execute(RemoveFavoritesParams { user_id: user_id.clone(), item_ids: item_ids(&removed) })
                    .await
                    .unwrap();
                let after_remove = get
                    .execute(GetFavoriteItemIdsParams { user_id })
                    .await
                    .unwrap();
                for id in item_ids(&removed) {
                    assert!(!after_remove.contains(&id));
                }
            });
        }
    }
}
