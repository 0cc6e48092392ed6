//! Client entity model and DTOs.

use lumeo_core::finance::FinanceTotals;
use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

/// Client enriched with financial aggregates over its projects,
/// recomputed on every read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWithStats {
    #[serde(flatten)]
    pub client: Client,
    pub project_count: i64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_margin: f64,
}

impl ClientWithStats {
    pub fn new(client: Client, totals: FinanceTotals) -> Self {
        Self {
            client,
            project_count: totals.project_count,
            total_revenue: totals.total_revenue,
            total_costs: totals.total_costs,
            total_margin: totals.total_margin,
        }
    }
}
