//! Budget item entity model and DTOs.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A budget line item under a project.
///
/// `total` is a generated column (`quantity * unit_price`); it is read back
/// after every write, never bound.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a budget item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetItem {
    pub description: String,
    /// Defaults to 1 if omitted.
    pub quantity: Option<f64>,
    /// Defaults to 0 if omitted.
    pub unit_price: Option<f64>,
}

/// DTO for updating a budget item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetItem {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}
