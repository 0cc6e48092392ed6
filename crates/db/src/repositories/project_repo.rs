//! Repository for the `projects` table.

use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectFinanceRow, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, phase, client_id, category_id, \
                       capture_responsible_id, editing_responsible_id, \
                       client_price, captation_cost, edition_cost, margin, \
                       client_due_date, client_received_date, \
                       freelancer_due_date, freelancer_delivery_date, \
                       created_at, updated_at";

/// Optional filters for project listing.
#[derive(Debug, Default, Clone)]
pub struct ProjectFilter {
    pub phase: Option<String>,
    pub client_id: Option<DbId>,
    pub category_id: Option<DbId>,
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `phase` defaults to `capture` and financial fields to 0 when omitted.
    /// The margin comes back from the generated column.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, phase, client_id, category_id,
                                   capture_responsible_id, editing_responsible_id,
                                   client_price, captation_cost, edition_cost,
                                   client_due_date, client_received_date,
                                   freelancer_due_date, freelancer_delivery_date)
             VALUES ($1, $2, COALESCE($3, 'capture'), $4, $5, $6, $7,
                     COALESCE($8, 0), COALESCE($9, 0), COALESCE($10, 0),
                     $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.phase)
            .bind(input.client_id)
            .bind(input.category_id)
            .bind(input.capture_responsible_id)
            .bind(input.editing_responsible_id)
            .bind(input.client_price)
            .bind(input.captation_cost)
            .bind(input.edition_cost)
            .bind(input.client_due_date)
            .bind(input.client_received_date)
            .bind(input.freelancer_due_date)
            .bind(input.freelancer_delivery_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, newest first, optionally filtered by phase, client,
    /// or category.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR phase = $1)
               AND ($2::BIGINT IS NULL OR client_id = $2)
               AND ($3::BIGINT IS NULL OR category_id = $3)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&filter.phase)
            .bind(filter.client_id)
            .bind(filter.category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; the
    /// stored margin is recomputed by the generated column from whatever
    /// financial values end up stored.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                phase = COALESCE($4, phase),
                client_id = COALESCE($5, client_id),
                category_id = COALESCE($6, category_id),
                capture_responsible_id = COALESCE($7, capture_responsible_id),
                editing_responsible_id = COALESCE($8, editing_responsible_id),
                client_price = COALESCE($9, client_price),
                captation_cost = COALESCE($10, captation_cost),
                edition_cost = COALESCE($11, edition_cost),
                client_due_date = COALESCE($12, client_due_date),
                client_received_date = COALESCE($13, client_received_date),
                freelancer_due_date = COALESCE($14, freelancer_due_date),
                freelancer_delivery_date = COALESCE($15, freelancer_delivery_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.phase)
            .bind(input.client_id)
            .bind(input.category_id)
            .bind(input.capture_responsible_id)
            .bind(input.editing_responsible_id)
            .bind(input.client_price)
            .bind(input.captation_cost)
            .bind(input.edition_cost)
            .bind(input.client_due_date)
            .bind(input.client_received_date)
            .bind(input.freelancer_due_date)
            .bind(input.freelancer_delivery_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Subtasks, budget items, and file metadata go
    /// with it via `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count projects referencing a client. Used for the delete guard.
    pub async fn count_by_client(pool: &PgPool, client_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM projects WHERE client_id = $1")
                .bind(client_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Count projects referencing a category. Used for the delete guard.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM projects WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Financial fields of every project belonging to a client.
    pub async fn finance_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ProjectFinanceRow>, sqlx::Error> {
        sqlx::query_as::<_, ProjectFinanceRow>(
            "SELECT client_price, captation_cost, edition_cost
             FROM projects WHERE client_id = $1",
        )
        .bind(client_id)
        .fetch_all(pool)
        .await
    }

    /// Financial fields of every project in a category.
    pub async fn finance_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ProjectFinanceRow>, sqlx::Error> {
        sqlx::query_as::<_, ProjectFinanceRow>(
            "SELECT client_price, captation_cost, edition_cost
             FROM projects WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }
}
