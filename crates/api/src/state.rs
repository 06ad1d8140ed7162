use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only storage handle; handlers hold no per-request session.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inventory_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
