//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::finance;
use lumeo_core::types::DbId;
use lumeo_db::models::client::{Client, ClientWithStats, CreateClient, UpdateClient};
use lumeo_db::repositories::{ClientRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Envelope::ok(clients))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<Json<Envelope<Client>>> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Nome é obrigatório".into()));
    }
    if let Some(ref email) = input.email {
        if ClientRepo::email_taken(&state.pool, email, None).await? {
            return Err(AppError::conflict("Já existe um cliente com este email"));
        }
    }

    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, "Client created");
    Ok(Envelope::ok(client))
}

/// GET /api/clients/{id}
///
/// Returns the client enriched with project count and financial totals,
/// recomputed from the stored projects on every request.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<ClientWithStats>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", id))?;

    let rows = ProjectRepo::finance_by_client(&state.pool, id).await?;
    let financials: Vec<_> = rows.into_iter().map(Into::into).collect();
    let totals = finance::totals(&financials);

    Ok(Envelope::ok(ClientWithStats::new(client, totals)))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Envelope<Client>>> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Nome é obrigatório".into()));
        }
    }
    // Uniqueness is checked against all *other* clients; the uq_ index
    // backs this up if a concurrent write slips through.
    if let Some(ref email) = input.email {
        if ClientRepo::email_taken(&state.pool, email, Some(id)).await? {
            return Err(AppError::conflict("Já existe um cliente com este email"));
        }
    }

    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Client", id))?;

    Ok(Envelope::with_message(
        client,
        "Cliente atualizado com sucesso",
    ))
}

/// DELETE /api/clients/{id}
///
/// Blocked while the client has associated projects; on success the deleted
/// entity is returned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Client>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", id))?;

    let project_count = ProjectRepo::count_by_client(&state.pool, id).await?;
    if project_count > 0 {
        return Err(AppError::conflict(
            "Não é possível deletar cliente com projetos associados",
        ));
    }

    ClientRepo::delete(&state.pool, id).await?;
    tracing::info!(client_id = id, "Client deleted");
    Ok(Envelope::with_message(client, "Cliente deletado com sucesso"))
}
