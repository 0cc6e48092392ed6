//! Handlers for `/projects/{id}/budget`.
//!
//! Budget items are fully persisted; the line total is a generated column
//! (`quantity * unit_price`) and never taken from the caller.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::types::DbId;
use lumeo_db::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};
use lumeo_db::repositories::{BudgetItemRepo, ProjectRepo};

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

fn validate_amounts(quantity: Option<f64>, unit_price: Option<f64>) -> Result<(), AppError> {
    if quantity.is_some_and(|q| q < 0.0 || !q.is_finite()) {
        return Err(AppError::BadRequest("Quantidade inválida".into()));
    }
    if unit_price.is_some_and(|p| p < 0.0 || !p.is_finite()) {
        return Err(AppError::BadRequest("Preço unitário inválido".into()));
    }
    Ok(())
}

/// GET /api/projects/{id}/budget
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<BudgetItem>>>> {
    ensure_project(&state, project_id).await?;
    let items = BudgetItemRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(items))
}

/// POST /api/projects/{id}/budget
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBudgetItem>,
) -> AppResult<Json<Envelope<BudgetItem>>> {
    ensure_project(&state, project_id).await?;
    if input.description.trim().is_empty() {
        return Err(AppError::BadRequest("Descrição é obrigatória".into()));
    }
    validate_amounts(input.quantity, input.unit_price)?;

    let item = BudgetItemRepo::create(&state.pool, project_id, &input).await?;
    Ok(Envelope::ok(item))
}

/// PUT /api/projects/{id}/budget/{item_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBudgetItem>,
) -> AppResult<Json<Envelope<BudgetItem>>> {
    if let Some(ref description) = input.description {
        if description.trim().is_empty() {
            return Err(AppError::BadRequest("Descrição é obrigatória".into()));
        }
    }
    validate_amounts(input.quantity, input.unit_price)?;

    let item = BudgetItemRepo::update(&state.pool, project_id, item_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("BudgetItem", item_id))?;
    Ok(Envelope::ok(item))
}

/// DELETE /api/projects/{id}/budget/{item_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope<DbId>>> {
    let deleted = BudgetItemRepo::delete(&state.pool, project_id, item_id).await?;
    if !deleted {
        return Err(AppError::not_found("BudgetItem", item_id));
    }
    Ok(Envelope::with_message(
        item_id,
        "Item de orçamento deletado com sucesso",
    ))
}
