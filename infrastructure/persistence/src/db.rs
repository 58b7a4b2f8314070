use std::time::Duration;

use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool.
///
/// Connects eagerly so an unreachable store is reported here rather than on
/// the first query.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to connect to database");
            DatabaseError::ConnectionError
        })?;

    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Logs a driver error and classifies it for the domain.
pub(crate) fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    error!(operation, error = %err, "database operation failed");
    match err {
        sqlx::Error::PoolClosed
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable,
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        _ => RepositoryError::DatabaseError,
    }
}
