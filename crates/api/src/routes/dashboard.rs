//! Dashboard route.
//!
//! Mounted at `/dashboard` by `api_routes()` (see `routes::mod`).

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::get))
}
