//! Asset entity model and DTOs.

use inventory_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::category::Category;

/// An asset with its parent category resolved.
///
/// Reads always attach the parent eagerly (a single JOIN at query time,
/// no second round trip), so the wire shape carries both the raw
/// `categoryId` and the embedded `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub model: String,
    pub value: Decimal,
    pub category_id: DbId,
    pub category: Category,
}

/// Flat row produced by the joined asset queries. The aliased category
/// column is folded into the nested [`Asset`] shape by the repository.
#[derive(Debug, FromRow)]
pub(crate) struct AssetRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub model: String,
    pub value: Decimal,
    pub category_id: DbId,
    pub category_name: String,
}

impl From<AssetRow> for Asset {
    fn from(row: AssetRow) -> Self {
        Asset {
            id: row.id,
            name: row.name,
            description: row.description,
            model: row.model,
            value: row.value,
            category_id: row.category_id,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

/// DTO for creating a new asset. Storage assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    #[validate(length(min = 1, max = 100, message = "name is required and must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50, message = "model is required and must be at most 50 characters"))]
    pub model: String,
    #[validate(custom(function = validate_non_negative))]
    pub value: Decimal,
    pub category_id: DbId,
}

/// DTO for replacing an existing asset (full-record replace; every stored
/// field is overwritten, there is no partial patch).
///
/// Carries the record id so the handler can reject a path/payload
/// mismatch before any storage work.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAsset {
    pub id: DbId,
    #[validate(length(min = 1, max = 100, message = "name is required and must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50, message = "model is required and must be at most 50 characters"))]
    pub model: String,
    #[validate(custom(function = validate_non_negative))]
    pub value: Decimal,
    pub category_id: DbId,
}

/// `value` must be zero or positive. The boundary is inclusive at 0.
fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("value must be greater than or equal to 0".into());
        return Err(err);
    }
    Ok(())
}
