//! Admin-only user management routes.
//!
//! Mounted at `/admin/users` by `api_routes()`. Every handler requires a
//! Bearer token with the admin role.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(users::list).post(users::create))
        .route(
            "/admin/users/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::deactivate),
        )
}
