//! Category entity model and DTOs.

use inventory_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
///
/// The asset back-reference is a derived view resolved by the asset
/// queries; it is never serialized on category responses.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category. Storage assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100, message = "name is required and must be at most 100 characters"))]
    pub name: String,
}

/// DTO for replacing an existing category (full-record replace).
///
/// Carries the record id so the handler can reject a path/payload
/// mismatch before any storage work.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCategory {
    pub id: DbId,
    #[validate(length(min = 1, max = 100, message = "name is required and must be at most 100 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_boundaries() {
        let ok = CreateCategory {
            name: "a".repeat(100),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCategory {
            name: "a".repeat(101),
        };
        assert!(too_long.validate().is_err());

        let empty = CreateCategory {
            name: String::new(),
        };
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
