//! Repository for the `subtasks` table.

use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::subtask::{CreateSubtask, Subtask, UpdateSubtask};

const COLUMNS: &str = "id, project_id, title, is_done, sort_order, created_at, updated_at";

/// Provides CRUD operations for subtasks, always scoped to a project.
pub struct SubtaskRepo;

impl SubtaskRepo {
    /// Insert a new subtask under a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateSubtask,
    ) -> Result<Subtask, sqlx::Error> {
        let query = format!(
            "INSERT INTO subtasks (project_id, title, sort_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subtask>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List a project's subtasks in sort order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Subtask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subtasks
             WHERE project_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Subtask>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a subtask, scoped to its project so cross-project IDs 404.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateSubtask,
    ) -> Result<Option<Subtask>, sqlx::Error> {
        let query = format!(
            "UPDATE subtasks SET
                title = COALESCE($3, title),
                is_done = COALESCE($4, is_done),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subtask>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.title)
            .bind(input.is_done)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subtask, scoped to its project. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subtasks WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
