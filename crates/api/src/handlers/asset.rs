//! Handlers for the `/assets` resource.
//!
//! Reads return assets with the parent category eagerly attached.
//! Mutations are single atomic statements in the repository: a missing
//! `categoryId` surfaces as a foreign-key violation classified as 400,
//! and an update against a concurrently-deleted row yields 404 from the
//! empty update result, never from a racing pre-check.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use inventory_db::repositories::AssetRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRepo::list(&state.pool).await?;
    Ok(Json(assets))
}

/// GET /api/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(asset))
}

/// POST /api/assets
///
/// Validates the payload, then inserts. Returns 201 with the full created
/// record (including resolved category) and a Location header pointing at
/// the GET-by-id route.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateAsset>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Asset>)> {
    input.validate()?;
    let asset = AssetRepo::create(&state.pool, &input).await?;
    let location = format!("/api/assets/{}", asset.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(asset),
    ))
}

/// PUT /api/assets/{id}
///
/// Full-record replace. The path id must equal the payload id, else 400
/// before any storage work. If the record no longer exists at the moment
/// of persisting, 404. On success returns 204 with no body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateAsset>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "payload id {} does not match path id {id}",
            input.id
        )));
    }
    input.validate()?;
    AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/assets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }))
    }
}
