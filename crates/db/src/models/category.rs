//! Category entity model and DTOs.

use lumeo_core::finance::FinanceTotals;
use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for updating an existing category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// Category enriched with financial aggregates over its projects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithStats {
    #[serde(flatten)]
    pub category: Category,
    pub project_count: i64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_margin: f64,
}

impl CategoryWithStats {
    pub fn new(category: Category, totals: FinanceTotals) -> Self {
        Self {
            category,
            project_count: totals.project_count,
            total_revenue: totals.total_revenue,
            total_costs: totals.total_costs,
            total_margin: totals.total_margin,
        }
    }
}
