//! Route definitions for the `/clients` resource.
//!
//! Also nests the append-only communication and note logs under
//! `/clients/{client_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, client_note, communication};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (with aggregates)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete (guarded)
///
/// GET    /{client_id}/communications    -> list (newest-first)
/// POST   /{client_id}/communications    -> create
/// GET    /{client_id}/notes             -> list (newest-first)
/// POST   /{client_id}/notes             -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
        .route(
            "/{client_id}/communications",
            get(communication::list).post(communication::create),
        )
        .route(
            "/{client_id}/notes",
            get(client_note::list).post(client_note::create),
        )
}
