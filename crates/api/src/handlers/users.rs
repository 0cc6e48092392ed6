//! Admin-only handlers for `/admin/users`.
//!
//! Users are never hard-deleted: projects keep `ON DELETE SET NULL`
//! references, and DELETE deactivates the account instead.

use axum::extract::{Path, State};
use axum::Json;
use lumeo_core::roles::validate_role;
use lumeo_core::types::DbId;
use lumeo_db::models::user::{CreateUser, UpdateUser, User};
use lumeo_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<User>>>> {
    auth.require_admin()?;
    let users = UserRepo::list(&state.pool).await?;
    Ok(Envelope::ok(users))
}

/// POST /api/admin/users
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<Envelope<User>>> {
    auth.require_admin()?;

    if input.name.trim().is_empty() || input.email.trim().is_empty() {
        return Err(AppError::BadRequest("Nome e email são obrigatórios".into()));
    }
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;
    if let Some(ref role) = input.role {
        validate_role(role).map_err(AppError::BadRequest)?;
    }
    if UserRepo::email_taken(&state.pool, &input.email, None).await? {
        return Err(AppError::conflict("Já existe um usuário com este email"));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    let user = UserRepo::create(&state.pool, &input, &password_hash).await?;

    tracing::info!(admin_id = auth.user_id, user_id = user.id, "User created");
    Ok(Envelope::ok(user))
}

/// GET /api/admin/users/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<User>>> {
    auth.require_admin()?;
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;
    Ok(Envelope::ok(user))
}

/// PUT /api/admin/users/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<Envelope<User>>> {
    auth.require_admin()?;

    if let Some(ref role) = input.role {
        validate_role(role).map_err(AppError::BadRequest)?;
    }
    if let Some(ref email) = input.email {
        if UserRepo::email_taken(&state.pool, email, Some(id)).await? {
            return Err(AppError::conflict("Já existe um usuário com este email"));
        }
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

    tracing::info!(admin_id = auth.user_id, user_id = id, "User updated");
    Ok(Envelope::with_message(user, "Usuário atualizado com sucesso"))
}

/// DELETE /api/admin/users/{id} -- deactivates instead of deleting.
pub async fn deactivate(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<DbId>>> {
    auth.require_admin()?;

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::not_found("User", id));
    }

    tracing::info!(admin_id = auth.user_id, user_id = id, "User deactivated");
    Ok(Envelope::with_message(id, "Usuário desativado"))
}
