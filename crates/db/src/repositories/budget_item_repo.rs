//! Repository for the `budget_items` table.

use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};

const COLUMNS: &str =
    "id, project_id, description, quantity, unit_price, total, created_at, updated_at";

/// Provides CRUD operations for budget line items, always scoped to a project.
pub struct BudgetItemRepo;

impl BudgetItemRepo {
    /// Insert a new budget item, returning the created row.
    ///
    /// `total` comes back from the generated column (`quantity * unit_price`).
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateBudgetItem,
    ) -> Result<BudgetItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_items (project_id, description, quantity, unit_price)
             VALUES ($1, $2, COALESCE($3, 1), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.unit_price)
            .fetch_one(pool)
            .await
    }

    /// List a project's budget items, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budget_items WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a budget item, scoped to its project.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateBudgetItem,
    ) -> Result<Option<BudgetItem>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_items SET
                description = COALESCE($3, description),
                quantity = COALESCE($4, quantity),
                unit_price = COALESCE($5, unit_price)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.unit_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a budget item, scoped to its project. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_items WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
