//! User entity model and DTOs.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub can_view_finance: bool,
    pub can_edit_projects: bool,
    pub can_view_all_projects: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The plaintext password is hashed by the
/// API layer before it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `editor` if omitted.
    pub role: Option<String>,
    pub can_view_finance: Option<bool>,
    pub can_edit_projects: Option<bool>,
    pub can_view_all_projects: Option<bool>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub can_view_finance: Option<bool>,
    pub can_edit_projects: Option<bool>,
    pub can_view_all_projects: Option<bool>,
    pub is_active: Option<bool>,
}
