//! Subtask entity model and DTOs.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subtask row from the `subtasks` table. Deleted together with its
/// parent project via `ON DELETE CASCADE`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub is_done: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new subtask under a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubtask {
    pub title: String,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing subtask.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubtask {
    pub title: Option<String>,
    pub is_done: Option<bool>,
    pub sort_order: Option<i32>,
}
