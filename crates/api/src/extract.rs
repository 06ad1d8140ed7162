//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that speaks the error envelope.
///
/// Axum's plain `Json` rejects a malformed or incomplete body with a
/// plain-text 422; this wrapper folds that rejection into [`AppError`] so
/// a missing required field comes back as a structured 400 like every
/// other validation failure.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
