use persistence::db::DatabaseConfig;

use super::database_config::database_config_from;
use super::yelp_config::YelpConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub yelp: YelpConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database: database_config_from(lookup)?,
            yelp: YelpConfig::from_lookup(lookup)?,
        })
    }
}
