use std::sync::Arc;

use anyhow::Context;
use logger::TracingLogger;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use yelp::client::YelpClient;
use yelp::search_provider::YelpSearchProvider;

use business::application::favorite::add::AddFavoritesUseCaseImpl;
use business::application::favorite::get_item_ids::GetFavoriteItemIdsUseCaseImpl;
use business::application::favorite::get_items::GetFavoriteItemsUseCaseImpl;
use business::application::favorite::remove::RemoveFavoritesUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::get_categories::GetCategoriesUseCaseImpl;
use business::application::item::save::SaveItemUseCaseImpl;
use business::application::item::search::SearchItemsUseCaseImpl;
use business::application::user::get_full_name::GetFullNameUseCaseImpl;
use business::application::user::verify_login::VerifyLoginUseCaseImpl;
use business::domain::favorite::use_cases::add::AddFavoritesUseCase;
use business::domain::favorite::use_cases::get_item_ids::GetFavoriteItemIdsUseCase;
use business::domain::favorite::use_cases::get_items::GetFavoriteItemsUseCase;
use business::domain::favorite::use_cases::remove::RemoveFavoritesUseCase;
use business::domain::item::use_cases::get_by_id::GetItemByIdUseCase;
use business::domain::item::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::item::use_cases::save::SaveItemUseCase;
use business::domain::item::use_cases::search::SearchItemsUseCase;
use business::domain::user::use_cases::get_full_name::GetFullNameUseCase;
use business::domain::user::use_cases::verify_login::VerifyLoginUseCase;

use crate::config::yelp_config::YelpConfig;

/// Every operation of the repository, wired to the Postgres and Yelp adapters.
pub struct DependencyContainer {
    pub add_favorites: Arc<dyn AddFavoritesUseCase>,
    pub remove_favorites: Arc<dyn RemoveFavoritesUseCase>,
    pub get_favorite_item_ids: Arc<dyn GetFavoriteItemIdsUseCase>,
    pub get_favorite_items: Arc<dyn GetFavoriteItemsUseCase>,
    pub get_item: Arc<dyn GetItemByIdUseCase>,
    pub get_categories: Arc<dyn GetCategoriesUseCase>,
    pub save_item: Arc<dyn SaveItemUseCase>,
    pub search_items: Arc<dyn SearchItemsUseCase>,
    pub verify_login: Arc<dyn VerifyLoginUseCase>,
    pub get_full_name: Arc<dyn GetFullNameUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, yelp_config: &YelpConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        let yelp_client =
            YelpClient::with_base_url(yelp_config.api_key.clone(), yelp_config.base_url.clone())
                .context("could not build the yelp http client")?;
        let search_provider = Arc::new(YelpSearchProvider::new(
            yelp_client,
            yelp_config.search_limit,
        ));

        // Favorite use cases
        let add_favorites = Arc::new(AddFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let remove_favorites = Arc::new(RemoveFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let get_favorite_item_ids = Arc::new(GetFavoriteItemIdsUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let get_favorite_items = Arc::new(GetFavoriteItemsUseCaseImpl {
            favorite_repository,
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let get_item = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories = Arc::new(GetCategoriesUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let save_item = Arc::new(SaveItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let search_items = Arc::new(SearchItemsUseCaseImpl {
            repository: item_repository,
            provider: search_provider,
            logger: logger.clone(),
        });

        // User use cases
        let verify_login = Arc::new(VerifyLoginUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_full_name = Arc::new(GetFullNameUseCaseImpl {
            repository: user_repository,
            logger,
        });

        Ok(Self {
            add_favorites,
            remove_favorites,
            get_favorite_item_ids,
            get_favorite_items,
            get_item,
            get_categories,
            save_item,
            search_items,
            verify_login,
            get_full_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::favorite::errors::FavoriteError;
    use business::domain::favorite::use_cases::add::AddFavoritesParams;
    use business::domain::favorite::use_cases::get_item_ids::GetFavoriteItemIdsParams;
    use business::domain::item::errors::ItemError;
    use business::domain::item::use_cases::get_categories::GetCategoriesParams;
    use business::domain::item::use_cases::search::SearchItemsParams;
    use business::domain::shared::value_objects::{ItemId, UserId};
    use business::domain::user::use_cases::verify_login::VerifyLoginParams;
    use sqlx::PgPool;

    fn yelp_config() -> YelpConfig {
        YelpConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9/v3".to_string(),
            search_limit: 20,
        }
    }

    async fn closed_container() -> DependencyContainer {
        let pool = PgPool::connect_lazy("postgres://nearby@127.0.0.1:1/nearby").unwrap();
        let container = DependencyContainer::new(pool.clone(), &yelp_config()).unwrap();
        pool.close().await;
        container
    }

    #[tokio::test]
    async fn should_report_unavailable_store_instead_of_empty_categories() {
        let container = closed_container().await;

        let result = container
            .get_categories
            .execute(GetCategoriesParams {
                item_id: ItemId::new("it1"),
            })
            .await;

        assert!(matches!(
            result,
            Err(ItemError::Repository(RepositoryError::Unavailable))
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_store_instead_of_empty_favorites() {
        let container = closed_container().await;

        let result = container
            .get_favorite_item_ids
            .execute(GetFavoriteItemIdsParams {
                user_id: UserId::new("u1"),
            })
            .await;

        assert!(matches!(
            result,
            Err(FavoriteError::Repository(RepositoryError::Unavailable))
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_store_instead_of_rejecting_login() {
        let container = closed_container().await;

        let result = container
            .verify_login
            .execute(VerifyLoginParams {
                user_id: UserId::new("u1"),
                password: "secret".to_string(),
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_accept_empty_favorite_batch_without_store() {
        let container = closed_container().await;

        let result = container
            .add_favorites
            .execute(AddFavoritesParams {
                user_id: UserId::new("u1"),
                item_ids: vec![],
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_validate_coordinates_before_any_io() {
        let container = closed_container().await;

        let result = container
            .search_items
            .execute(SearchItemsParams {
                latitude: -95.0,
                longitude: 10.0,
                term: "coffee".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ItemError::InvalidCoordinates)));
    }
}
