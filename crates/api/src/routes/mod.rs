//! Route tree for the `/api` prefix.

pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories          GET list, POST create
/// /categories/{id}     GET, PUT, DELETE
/// /assets              GET list, POST create
/// /assets/{id}         GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list).post(handlers::category::create),
        )
        .route(
            "/categories/{id}",
            get(handlers::category::get_by_id)
                .put(handlers::category::update)
                .delete(handlers::category::delete),
        )
        .route(
            "/assets",
            get(handlers::asset::list).post(handlers::asset::create),
        )
        .route(
            "/assets/{id}",
            get(handlers::asset::get_by_id)
                .put(handlers::asset::update)
                .delete(handlers::asset::delete),
        )
}
