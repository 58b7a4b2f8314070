use dotenvy::dotenv;
use sqlx::PgPool;
use tracing::info;

use crate::config::app_config::AppConfig;
use crate::config::database_config;
use crate::setup::dependency_injection::DependencyContainer;

/// A connected repository. Construction fails if the store is unreachable;
/// there is no degraded mode.
pub struct App {
    pub container: DependencyContainer,
    pool: PgPool,
}

impl App {
    /// 1. Initialize tracing with RUST_LOG env filter
    /// 2. Load environment variables
    /// 3. Load configuration
    /// 4. Connect to the database
    /// 5. Wire dependencies
    pub async fn start() -> anyhow::Result<Self> {
        logger::init_tracing("info");
        dotenv().ok();
        let config = AppConfig::from_env()?;
        Self::with_config(&config).await
    }

    pub async fn with_config(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = database_config::init_database(&config.database).await?;
        let container = DependencyContainer::new(pool.clone(), &config.yelp)?;
        info!("repository ready");
        Ok(Self { container, pool })
    }

    /// Releases every pooled connection. Operations issued afterwards fail
    /// with `repository.unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
