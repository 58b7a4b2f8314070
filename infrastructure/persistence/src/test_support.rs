use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use business::domain::item::model::Item;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::ItemId;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const SCHEMA: &str = include_str!("../schema.sql");

/// Connects to `DATABASE_URL` and applies the reference schema.
///
/// Returns `None` when no database is configured, so these tests are skipped
/// on machines without Postgres.
pub(crate) async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("DATABASE_URL is set but the database is unreachable");

    // Parallel tests race on CREATE TABLE IF NOT EXISTS without the lock.
    let script = format!("SELECT pg_advisory_xact_lock(727001);\n{}", SCHEMA);
    sqlx::raw_sql(&script)
        .execute(&pool)
        .await
        .expect("failed to apply schema.sql");

    Some(pool)
}

/// An id no other test run will use, since the tables are shared.
pub(crate) fn unique_id(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!(
        "{}-{}-{}-{}",
        prefix,
        std::process::id(),
        nanos,
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

pub(crate) fn item(item_id: &str, name: &str, rating: f64, categories: &[&str]) -> Item {
    Item::from_repository(
        ItemId::new(item_id),
        name.to_string(),
        rating,
        format!("{} street", name),
        format!("https://www.yelp.com/biz/{}", item_id),
        format!("https://img.yelp.com/{}.jpg", item_id),
        120.5,
        categories.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
    )
}

pub(crate) struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
