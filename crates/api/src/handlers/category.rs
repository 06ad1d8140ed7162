//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::category::{Category, CreateCategory, UpdateCategory};
use inventory_db::repositories::CategoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /api/categories
///
/// Returns 201 with the created record and a Location header pointing at
/// the GET-by-id route.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCategory>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Category>)> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    let location = format!("/api/categories/{}", category.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

/// PUT /api/categories/{id}
///
/// Full-record replace. The path id must equal the payload id; on success
/// returns 204 with no body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateCategory>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "payload id {} does not match path id {id}",
            input.id
        )));
    }
    input.validate()?;
    CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/categories/{id}
///
/// Rejected with 409 while any asset still references the category
/// (`ON DELETE RESTRICT`); the category and its assets are left unchanged.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match CategoryRepo::delete(&state.pool, id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        })),
        Err(err) if inventory_db::is_foreign_key_violation(&err) => {
            Err(AppError::Core(CoreError::Conflict(
                "Category is still referenced by one or more assets".to_string(),
            )))
        }
        Err(err) => Err(err.into()),
    }
}
