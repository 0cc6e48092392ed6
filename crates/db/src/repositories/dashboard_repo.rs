//! Aggregate queries for the dashboard snapshot.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Project counts per phase plus overall financial totals, computed in a
/// single pass over the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub capture_count: i64,
    pub editing_count: i64,
    pub finished_count: i64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_margin: f64,
}

/// Provides read-only aggregates for the dashboard endpoint.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the dashboard snapshot. Empty tables yield all zeros.
    pub async fn snapshot(pool: &PgPool) -> Result<DashboardSnapshot, sqlx::Error> {
        sqlx::query_as::<_, DashboardSnapshot>(
            "SELECT
                COUNT(*) FILTER (WHERE phase = 'capture')  AS capture_count,
                COUNT(*) FILTER (WHERE phase = 'editing')  AS editing_count,
                COUNT(*) FILTER (WHERE phase = 'finished') AS finished_count,
                COALESCE(SUM(client_price), 0)                        AS total_revenue,
                COALESCE(SUM(captation_cost + edition_cost), 0)       AS total_costs,
                COALESCE(SUM(margin), 0)                              AS total_margin
             FROM projects",
        )
        .fetch_one(pool)
        .await
    }
}
