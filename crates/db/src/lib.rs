//! Persistence layer for the Lumeo CRM.
//!
//! One model module and one repository struct per table. Repositories are
//! stateless: every method takes a `&PgPool` and returns `sqlx::Error` for
//! the API layer to classify.

pub mod models;
pub mod repositories;

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool type used across crates.
pub type DbPool = PgPool;

/// Create the PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Row counts per table, served by the diagnostic endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub users: i64,
    pub clients: i64,
    pub categories: i64,
    pub projects: i64,
    pub subtasks: i64,
    pub communications: i64,
    pub client_notes: i64,
    pub budget_items: i64,
    pub files: i64,
}

/// Collect row counts for every CRM table in one query.
pub async fn storage_stats(pool: &DbPool) -> Result<StorageStats, sqlx::Error> {
    let row: (i64, i64, i64, i64, i64, i64, i64, i64, i64) = sqlx::query_as(
        "SELECT
            (SELECT COUNT(*) FROM users),
            (SELECT COUNT(*) FROM clients),
            (SELECT COUNT(*) FROM categories),
            (SELECT COUNT(*) FROM projects),
            (SELECT COUNT(*) FROM subtasks),
            (SELECT COUNT(*) FROM communications),
            (SELECT COUNT(*) FROM client_notes),
            (SELECT COUNT(*) FROM budget_items),
            (SELECT COUNT(*) FROM files)",
    )
    .fetch_one(pool)
    .await?;

    Ok(StorageStats {
        users: row.0,
        clients: row.1,
        categories: row.2,
        projects: row.3,
        subtasks: row.4,
        communications: row.5,
        client_notes: row.6,
        budget_items: row.7,
        files: row.8,
    })
}
