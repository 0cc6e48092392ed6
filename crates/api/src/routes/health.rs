//! Liveness and diagnostic routes.
//!
//! Mounted at `/health` and `/test` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{diagnostics, health};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/test", get(diagnostics::diagnostics))
}
