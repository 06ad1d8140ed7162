//! Wire types as the client sees them.
//!
//! These mirror the server's JSON shapes (camelCase fields, embedded
//! category on asset reads) without pulling the server's storage layer
//! into the client.

use inventory_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A category as returned by `/api/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// An asset as returned by `/api/assets`, parent category resolved.
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

/// Payload for creating or replacing an asset. The id is never part of
/// this shape: create omits it, update injects it from the target id.
///
/// The validation rules mirror the server's exactly; they run before any
/// request is issued so obvious mistakes fail without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
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
