use std::time::Duration;

use anyhow::{Context, anyhow};
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;

/// Builds the database configuration from a variable lookup.
///
/// Variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
pub fn database_config_from(
    lookup: &impl Fn(&str) -> Option<String>,
) -> anyhow::Result<DatabaseConfig> {
    let url = lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;
    let mut config = DatabaseConfig::new(url);

    if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
        config.max_connections = raw
            .parse()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", raw))?;
    }
    if let Some(raw) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        let secs: u64 = raw
            .parse()
            .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {}", raw))?;
        config.acquire_timeout = Duration::from_secs(secs);
    }

    Ok(config)
}

/// Initialize database connection pool
///
/// # Errors
/// Returns error if the store cannot be reached
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config)
        .await
        .context("could not connect to the database")?;
    Ok(pool)
}
