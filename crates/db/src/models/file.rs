//! File metadata entity model and DTO.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file metadata row under a project. The binary payload lives elsewhere;
/// only metadata is tracked here.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: DbId,
    pub project_id: DbId,
    pub filename: String,
    pub mime_type: String,
    /// Derived server-side from `mime_type`, never trusted from the caller.
    pub category: String,
    pub size_bytes: i64,
    pub uploaded_by: String,
    pub created_at: Timestamp,
}

/// DTO for registering a file's metadata under a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectFile {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: Option<i64>,
    pub uploaded_by: Option<String>,
}
