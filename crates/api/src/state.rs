use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally, the config is
/// behind one). No other in-process shared state exists: every request is
/// handled independently against the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lumeo_db::DbPool,
    /// Server configuration (JWT settings, timeouts).
    pub config: Arc<ServerConfig>,
}
