//! Repository for the `files` table (project file metadata).

use lumeo_core::communications::DEFAULT_AUTHOR;
use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::{CreateProjectFile, ProjectFile};

const COLUMNS: &str =
    "id, project_id, filename, mime_type, category, size_bytes, uploaded_by, created_at";

/// Provides metadata operations for project files.
pub struct FileRepo;

impl FileRepo {
    /// Register a file's metadata under a project, returning the created row.
    ///
    /// `category` is derived by the caller from the MIME type; it is bound
    /// here rather than taken from client input.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectFile,
        category: &str,
    ) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO files (project_id, filename, mime_type, category, size_bytes, uploaded_by)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, $7))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(&input.filename)
            .bind(&input.mime_type)
            .bind(category)
            .bind(input.size_bytes)
            .bind(&input.uploaded_by)
            .bind(DEFAULT_AUTHOR)
            .fetch_one(pool)
            .await
    }

    /// List a project's files, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM files
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a file's metadata, scoped to its project. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
