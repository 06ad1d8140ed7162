//! Repository for the `assets` table.
//!
//! Every read resolves the parent category in the same statement (eager
//! JOIN) so the response shape is deterministic and there is no N+1
//! follow-up query. Mutations are single atomic statements: the record
//! change and its referential check commit together or not at all.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetRow, CreateAsset, UpdateAsset};

/// Column list shared across queries. Category columns are aliased so the
/// flat row can be folded into the nested wire shape.
const COLUMNS: &str = "a.id, a.name, a.description, a.model, a.value, \
    a.category_id, c.name AS category_name";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row with its resolved
    /// category.
    ///
    /// The insert and the category join run in one statement; a missing
    /// `category_id` surfaces as a foreign-key violation, not as a
    /// separate racing existence check.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                INSERT INTO assets (name, description, model, value, category_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, description, model, value, category_id
             )
             SELECT {COLUMNS} FROM a JOIN categories c ON c.id = a.category_id"
        );
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.model)
            .bind(input.value)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find an asset by its internal ID, with its resolved category.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets a
             JOIN categories c ON c.id = a.category_id
             WHERE a.id = $1"
        );
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List all assets in storage-native (id) order, each with its
    /// resolved category.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets a
             JOIN categories c ON c.id = a.category_id
             ORDER BY a.id"
        );
        let rows = sqlx::query_as::<_, AssetRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Replace an asset (full-record replace: every stored field is
    /// overwritten with the payload's corresponding field).
    ///
    /// Returns `None` if no row with the given `id` exists at the moment
    /// of persisting, which disambiguates "already gone" without a
    /// pre-check that could race with the write.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                UPDATE assets
                SET name = $2, description = $3, model = $4, value = $5, category_id = $6
                WHERE id = $1
                RETURNING id, name, description, model, value, category_id
             )
             SELECT {COLUMNS} FROM a JOIN categories c ON c.id = a.category_id"
        );
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.model)
            .bind(input.value)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
