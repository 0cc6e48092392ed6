//! Handlers for `/projects/{id}/files`.
//!
//! Only file *metadata* is persisted; the category is derived server-side
//! from the MIME type. Binary storage is out of scope.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::files::{categorize_mime, validate_file};
use lumeo_core::types::DbId;
use lumeo_db::models::file::{CreateProjectFile, ProjectFile};
use lumeo_db::repositories::{FileRepo, ProjectRepo};

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

/// GET /api/projects/{id}/files
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<ProjectFile>>>> {
    ensure_project(&state, project_id).await?;
    let files = FileRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(files))
}

/// POST /api/projects/{id}/files
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectFile>,
) -> AppResult<Json<Envelope<ProjectFile>>> {
    ensure_project(&state, project_id).await?;
    validate_file(&input.filename, &input.mime_type).map_err(AppError::BadRequest)?;
    if input.size_bytes.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest("Tamanho do arquivo inválido".into()));
    }

    let category = categorize_mime(&input.mime_type);
    let file = FileRepo::create(&state.pool, project_id, &input, category).await?;
    tracing::info!(project_id, file_id = file.id, category, "File registered");
    Ok(Envelope::ok(file))
}

/// DELETE /api/projects/{id}/files/{file_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope<DbId>>> {
    let deleted = FileRepo::delete(&state.pool, project_id, file_id).await?;
    if !deleted {
        return Err(AppError::not_found("File", file_id));
    }
    Ok(Envelope::with_message(
        file_id,
        "Arquivo deletado com sucesso",
    ))
}
