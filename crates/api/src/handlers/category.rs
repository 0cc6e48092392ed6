//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::finance;
use lumeo_core::types::DbId;
use lumeo_db::models::category::{Category, CategoryWithStats, CreateCategory, UpdateCategory};
use lumeo_db::repositories::{CategoryRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Envelope::ok(categories))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<Json<Envelope<Category>>> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Nome é obrigatório".into()));
    }
    if CategoryRepo::name_taken(&state.pool, &input.name, None).await? {
        return Err(AppError::conflict("Já existe uma categoria com este nome"));
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok(Envelope::ok(category))
}

/// GET /api/categories/{id}
///
/// Returns the category enriched with project count and financial totals.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<CategoryWithStats>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))?;

    let rows = ProjectRepo::finance_by_category(&state.pool, id).await?;
    let financials: Vec<_> = rows.into_iter().map(Into::into).collect();
    let totals = finance::totals(&financials);

    Ok(Envelope::ok(CategoryWithStats::new(category, totals)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Envelope<Category>>> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Nome é obrigatório".into()));
        }
        if CategoryRepo::name_taken(&state.pool, name, Some(id)).await? {
            return Err(AppError::conflict("Já existe uma categoria com este nome"));
        }
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))?;

    Ok(Envelope::with_message(
        category,
        "Categoria atualizada com sucesso",
    ))
}

/// DELETE /api/categories/{id}
///
/// Blocked while the category has associated projects; on success the
/// deleted entity is returned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))?;

    let project_count = ProjectRepo::count_by_category(&state.pool, id).await?;
    if project_count > 0 {
        return Err(AppError::conflict(
            "Não é possível deletar categoria com projetos associados",
        ));
    }

    CategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(category_id = id, "Category deleted");
    Ok(Envelope::with_message(
        category,
        "Categoria deletada com sucesso",
    ))
}
