//! Route definitions for the `/projects` resource.
//!
//! Also nests subtasks, budget items, and file metadata under
//! `/projects/{project_id}/...`.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{budget, files, project, subtask};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                               -> list (?phase=&clientId=&categoryId=)
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id (with subtasks)
/// PUT    /{id}                           -> update (margin recomputed)
/// DELETE /{id}                           -> delete (cascades)
///
/// GET    /{project_id}/subtasks          -> list
/// POST   /{project_id}/subtasks          -> create
/// PUT    /{project_id}/subtasks/{id}     -> update
/// DELETE /{project_id}/subtasks/{id}     -> delete
///
/// GET    /{project_id}/budget            -> list
/// POST   /{project_id}/budget            -> create
/// PUT    /{project_id}/budget/{id}       -> update
/// DELETE /{project_id}/budget/{id}       -> delete
///
/// GET    /{project_id}/files             -> list
/// POST   /{project_id}/files             -> create (category derived)
/// DELETE /{project_id}/files/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/subtasks",
            get(subtask::list).post(subtask::create),
        )
        .route(
            "/{project_id}/subtasks/{subtask_id}",
            put(subtask::update).delete(subtask::delete),
        )
        .route(
            "/{project_id}/budget",
            get(budget::list).post(budget::create),
        )
        .route(
            "/{project_id}/budget/{item_id}",
            put(budget::update).delete(budget::delete),
        )
        .route("/{project_id}/files", get(files::list).post(files::create))
        .route("/{project_id}/files/{file_id}", delete(files::delete))
}
