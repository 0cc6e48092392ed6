//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use lumeo_core::phases::validate_phase;
use lumeo_core::types::DbId;
use lumeo_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use lumeo_db::repositories::project_repo::ProjectFilter;
use lumeo_db::repositories::{ClientRepo, ProjectRepo, SubtaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for listing projects.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    pub phase: Option<String>,
    pub client_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

/// GET /api/projects?phase=&clientId=&categoryId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Envelope<Vec<Project>>>> {
    if let Some(ref phase) = params.phase {
        validate_phase(phase).map_err(AppError::BadRequest)?;
    }

    let filter = ProjectFilter {
        phase: params.phase,
        client_id: params.client_id,
        category_id: params.category_id,
    };
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Envelope::ok(projects))
}

/// POST /api/projects
///
/// The stored margin comes from the generated column; whatever the caller
/// sends for it is ignored by the DTO.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<Envelope<Project>>> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Título é obrigatório".into()));
    }
    if let Some(ref phase) = input.phase {
        validate_phase(phase).map_err(AppError::BadRequest)?;
    }
    if ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Cliente informado não existe".into()));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, client_id = project.client_id, "Project created");
    Ok(Envelope::ok(project))
}

/// GET /api/projects/{id}
///
/// Returns the project with its subtasks.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    let subtasks = SubtaskRepo::list_by_project(&state.pool, id).await?;

    Ok(Envelope::ok(ProjectDetail { project, subtasks }))
}

/// PUT /api/projects/{id}
///
/// Omitted financial fields keep their stored values; the margin is always
/// recomputed from whatever ends up stored, never taken from the caller.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Envelope<Project>>> {
    if let Some(ref title) = input.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Título é obrigatório".into()));
        }
    }
    if let Some(ref phase) = input.phase {
        validate_phase(phase).map_err(AppError::BadRequest)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;

    Ok(Envelope::with_message(
        project,
        "Projeto atualizado com sucesso",
    ))
}

/// DELETE /api/projects/{id}
///
/// Cascades to subtasks, budget items, and file metadata.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;

    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(Envelope::with_message(
        project,
        "Projeto deletado com sucesso",
    ))
}
