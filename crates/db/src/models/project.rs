//! Project entity model and DTOs.

use chrono::NaiveDate;
use lumeo_core::finance::ProjectFinancials;
use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::subtask::Subtask;

/// A project row from the `projects` table.
///
/// `margin` is a generated column (`client_price - captation_cost -
/// edition_cost`); it is read back after every write, never bound.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub phase: String,
    pub client_id: DbId,
    pub category_id: Option<DbId>,
    pub capture_responsible_id: Option<DbId>,
    pub editing_responsible_id: Option<DbId>,
    pub client_price: f64,
    pub captation_cost: f64,
    pub edition_cost: f64,
    pub margin: f64,
    pub client_due_date: Option<NaiveDate>,
    pub client_received_date: Option<NaiveDate>,
    pub freelancer_due_date: Option<NaiveDate>,
    pub freelancer_delivery_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `capture` if omitted.
    pub phase: Option<String>,
    pub client_id: DbId,
    pub category_id: Option<DbId>,
    pub capture_responsible_id: Option<DbId>,
    pub editing_responsible_id: Option<DbId>,
    pub client_price: Option<f64>,
    pub captation_cost: Option<f64>,
    pub edition_cost: Option<f64>,
    pub client_due_date: Option<NaiveDate>,
    pub client_received_date: Option<NaiveDate>,
    pub freelancer_due_date: Option<NaiveDate>,
    pub freelancer_delivery_date: Option<NaiveDate>,
}

/// DTO for updating an existing project. All fields are optional; omitted
/// financial fields keep their stored values and the margin is recomputed
/// from whatever ends up stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub phase: Option<String>,
    pub client_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub capture_responsible_id: Option<DbId>,
    pub editing_responsible_id: Option<DbId>,
    pub client_price: Option<f64>,
    pub captation_cost: Option<f64>,
    pub edition_cost: Option<f64>,
    pub client_due_date: Option<NaiveDate>,
    pub client_received_date: Option<NaiveDate>,
    pub freelancer_due_date: Option<NaiveDate>,
    pub freelancer_delivery_date: Option<NaiveDate>,
}

/// Project enriched with its subtask list for detail views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub subtasks: Vec<Subtask>,
}

/// Minimal financial projection of a project row, used for aggregation.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ProjectFinanceRow {
    pub client_price: f64,
    pub captation_cost: f64,
    pub edition_cost: f64,
}

impl From<ProjectFinanceRow> for ProjectFinancials {
    fn from(row: ProjectFinanceRow) -> Self {
        ProjectFinancials {
            client_price: row.client_price,
            captation_cost: row.captation_cost,
            edition_cost: row.edition_cost,
        }
    }
}
