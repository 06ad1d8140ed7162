//! Repository for the `categories` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in storage-native (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Replace a category. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&input.name)
        .fetch_optional(pool)
        .await
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any asset still references
    /// the category (`ON DELETE RESTRICT`); the delete is rejected, never
    /// cascaded.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
