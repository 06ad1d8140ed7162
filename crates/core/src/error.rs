use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Handlers resolve `NotFound` and `Validation` at the endpoint boundary;
/// `Conflict` covers referential-integrity rejections (a category delete
/// blocked by dependent assets). Anything that does not fit these is an
/// unexpected failure and belongs to the HTTP layer's 500 path.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced record does not exist. An expected outcome, not an
    /// operator-level failure.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or out-of-range input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request conflicts with existing records.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An internal invariant was broken.
    #[error("internal error: {0}")]
    Internal(String),
}
