//! Database access layer: pool bootstrap, entity models, and repositories.
//!
//! The pool is the only shared storage handle; connections are acquired
//! per statement, so no session state leaks across requests.

pub mod models;
pub mod repositories;
pub mod seed;

pub use seed::seed_demo_data;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared PostgreSQL connection pool.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from the workspace-level `db/migrations`
/// directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Whether `err` is a PostgreSQL foreign-key violation (SQLSTATE 23503).
///
/// The only foreign key in the schema is `assets.category_id`, so callers
/// can attribute a violation without inspecting the constraint name: an
/// asset write referenced a missing category, or a category delete was
/// blocked by dependent assets.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23503"),
        _ => false,
    }
}
