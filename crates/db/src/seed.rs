//! First-run data for a fresh deployment.

use inventory_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Seed the demo categories and sample assets on an empty database.
///
/// Guarded on the categories table being empty, so repeated startups and
/// already-populated deployments are left untouched. All inserts run in
/// one transaction; a partial seed never persists.
///
/// Returns `true` if data was inserted.
pub async fn seed_demo_data(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut category_ids: Vec<DbId> = Vec::with_capacity(3);
    for name in ["Electronics", "Furniture", "Vehicles"] {
        let id: DbId =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;
        category_ids.push(id);
    }

    let assets = [
        ("Laptop", "Dell XPS 13", "XPS 13", Decimal::new(120_000, 2), category_ids[0]),
        ("Chair", "Office chair", "Ergonomic", Decimal::new(15_000, 2), category_ids[1]),
        ("Car", "Toyota Corolla", "Corolla", Decimal::new(1_500_000, 2), category_ids[2]),
    ];
    for (name, description, model, value, category_id) in assets {
        sqlx::query(
            "INSERT INTO assets (name, description, model, value, category_id)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(description)
        .bind(model)
        .bind(value)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(true)
}
