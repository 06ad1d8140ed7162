use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory_core::error::CoreError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure path produces the same
/// `{statusCode, message, detail}` JSON envelope the client expects --
/// a caller never sees a raw, unstructured failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input failed DTO validation; carries per-field messages.
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// The request body could not be deserialized into the expected shape
    /// (malformed JSON, wrong types, or a missing required field).
    #[error("invalid request body: {0}")]
    Body(#[from] axum::extract::rejection::JsonRejection),

    /// A bad request with a human-readable message.
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Opaque message for the 500 path; internals go to the operator log.
const INTERNAL_MESSAGE: &str = "Internal Server Error. Please contact support.";

/// Wire shape for every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

/// Build the uniform `{statusCode, message, detail}` error response.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    detail: Option<serde_json::Value>,
) -> Response {
    let body = ErrorBody {
        status_code: status.as_u16(),
        message: message.into(),
        detail,
    };
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => error_response(
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => {
                    error_response(StatusCode::BAD_REQUEST, msg, None)
                }
                CoreError::Conflict(msg) => error_response(StatusCode::CONFLICT, msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_MESSAGE,
                        internal_detail(msg),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(&err),

            AppError::Validation(errors) => {
                let detail = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
                error_response(StatusCode::BAD_REQUEST, "Validation failed", Some(detail))
            }

            // A body the deserializer rejected is a client error like any
            // other validation failure, never axum's plain-text 422.
            AppError::Body(rejection) => {
                error_response(StatusCode::BAD_REQUEST, rejection.body_text(), None)
            }

            AppError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg, None),
        }
    }
}

/// Classify a sqlx error into the uniform error response.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key violations (SQLSTATE 23503) map to 400: the only foreign
///   key reachable from an asset write is `assets.category_id`, so the
///   payload referenced a category that does not exist. (Category deletes
///   intercept the violation at the handler and map it to 409 instead.)
/// - Everything else is unexpected: logged with full detail for operators
///   and surfaced as an opaque 500.
fn classify_sqlx_error(err: &sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => {
            error_response(StatusCode::NOT_FOUND, "Resource not found", None)
        }
        _ if inventory_db::is_foreign_key_violation(err) => error_response(
            StatusCode::BAD_REQUEST,
            "categoryId must reference an existing category",
            None,
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE,
                internal_detail(other.to_string()),
            )
        }
    }
}

/// Detail payload for the 500 envelope.
///
/// Internals are exposed in the body only in debug builds; a release
/// deployment keeps them in the operator log and returns the opaque
/// envelope alone.
pub(crate) fn internal_detail(detail: String) -> Option<serde_json::Value> {
    if cfg!(debug_assertions) {
        Some(serde_json::Value::String(detail))
    } else {
        None
    }
}
