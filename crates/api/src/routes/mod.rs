pub mod admin;
pub mod auth;
pub mod category;
pub mod client;
pub mod dashboard;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  liveness + DB reachability
/// /test                                    storage statistics (diagnostic)
///
/// /auth/login                              login (public)
///
/// /admin/users                             list, create (admin only)
/// /admin/users/{id}                        get, update, deactivate
///
/// /clients                                 list, create
/// /clients/{id}                            get (with aggregates), update, delete
/// /clients/{client_id}/communications      list, create (newest-first)
/// /clients/{client_id}/notes               list, create (newest-first)
///
/// /categories                              list, create
/// /categories/{id}                         get (with aggregates), update, delete
///
/// /projects                                list (filterable), create
/// /projects/{id}                           get (with subtasks), update, delete
/// /projects/{project_id}/subtasks          list, create
/// /projects/{project_id}/subtasks/{id}     update, delete
/// /projects/{project_id}/budget            list, create
/// /projects/{project_id}/budget/{id}       update, delete
/// /projects/{project_id}/files             list, create
/// /projects/{project_id}/files/{id}        delete
///
/// /dashboard                               aggregate snapshot
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(admin::router())
        .merge(dashboard::router())
        .nest("/clients", client::router())
        .nest("/categories", category::router())
        .nest("/projects", project::router())
}
