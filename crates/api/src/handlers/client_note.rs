//! Handlers for `/clients/{id}/notes`.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::communications::validate_content;
use lumeo_core::types::DbId;
use lumeo_db::models::client_note::{ClientNote, CreateClientNote};
use lumeo_db::repositories::{ClientNoteRepo, ClientRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/clients/{id}/notes
///
/// Returns the client's notes, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<ClientNote>>>> {
    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", client_id))?;
    let notes = ClientNoteRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Envelope::ok(notes))
}

/// POST /api/clients/{id}/notes
///
/// Requires non-empty content; `createdBy` defaults to the placeholder
/// identity when omitted.
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateClientNote>,
) -> AppResult<Json<Envelope<ClientNote>>> {
    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", client_id))?;
    validate_content(&input.content).map_err(AppError::BadRequest)?;

    let note = ClientNoteRepo::create(&state.pool, client_id, &input).await?;
    Ok(Envelope::ok(note))
}
