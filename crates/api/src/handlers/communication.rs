//! Handlers for `/clients/{id}/communications`.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::communications::{validate_communication, validate_status};
use lumeo_core::types::DbId;
use lumeo_db::models::communication::{Communication, CreateCommunication};
use lumeo_db::repositories::{ClientRepo, CommunicationRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// 404 unless the parent client exists.
async fn ensure_client(state: &AppState, client_id: DbId) -> Result<(), AppError> {
    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("Client", client_id))
}

/// GET /api/clients/{id}/communications
///
/// Returns the client's append-only contact log, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<Communication>>>> {
    ensure_client(&state, client_id).await?;
    let communications = CommunicationRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Envelope::ok(communications))
}

/// POST /api/clients/{id}/communications
///
/// Requires type and subject; `status` defaults to `pending` and `sentBy`
/// to the placeholder identity when omitted.
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateCommunication>,
) -> AppResult<Json<Envelope<Communication>>> {
    ensure_client(&state, client_id).await?;
    validate_communication(&input.comm_type, &input.subject).map_err(AppError::BadRequest)?;
    if let Some(ref status) = input.status {
        validate_status(status).map_err(AppError::BadRequest)?;
    }

    let communication = CommunicationRepo::create(&state.pool, client_id, &input).await?;
    tracing::info!(
        client_id,
        communication_id = communication.id,
        "Communication logged"
    );
    Ok(Envelope::ok(communication))
}
