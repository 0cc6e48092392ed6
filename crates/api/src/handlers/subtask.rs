//! Handlers for `/projects/{id}/subtasks`.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::types::DbId;
use lumeo_db::models::subtask::{CreateSubtask, Subtask, UpdateSubtask};
use lumeo_db::repositories::{ProjectRepo, SubtaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// 404 unless the parent project exists.
async fn ensure_project(state: &AppState, project_id: DbId) -> Result<(), AppError> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("Project", project_id))
}

/// GET /api/projects/{id}/subtasks
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<Subtask>>>> {
    ensure_project(&state, project_id).await?;
    let subtasks = SubtaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(subtasks))
}

/// POST /api/projects/{id}/subtasks
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSubtask>,
) -> AppResult<Json<Envelope<Subtask>>> {
    ensure_project(&state, project_id).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Título é obrigatório".into()));
    }

    let subtask = SubtaskRepo::create(&state.pool, project_id, &input).await?;
    Ok(Envelope::ok(subtask))
}

/// PUT /api/projects/{id}/subtasks/{subtask_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, subtask_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSubtask>,
) -> AppResult<Json<Envelope<Subtask>>> {
    if let Some(ref title) = input.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Título é obrigatório".into()));
        }
    }

    let subtask = SubtaskRepo::update(&state.pool, project_id, subtask_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Subtask", subtask_id))?;
    Ok(Envelope::ok(subtask))
}

/// DELETE /api/projects/{id}/subtasks/{subtask_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, subtask_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope<DbId>>> {
    let deleted = SubtaskRepo::delete(&state.pool, project_id, subtask_id).await?;
    if !deleted {
        return Err(AppError::not_found("Subtask", subtask_id));
    }
    Ok(Envelope::with_message(
        subtask_id,
        "Subtarefa deletada com sucesso",
    ))
}
