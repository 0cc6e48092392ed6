//! Financial aggregation over project collections.
//!
//! Margins and totals are always recomputed from stored values at read time;
//! nothing here is cached or trusted from client input. The per-row margin is
//! additionally enforced by a generated column in the `projects` table, so
//! the database and this module can never disagree.

use serde::Serialize;

/// The financial fields of a single project, as stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFinancials {
    pub client_price: f64,
    pub captation_cost: f64,
    pub edition_cost: f64,
}

impl ProjectFinancials {
    /// Cost total for this project (capture plus edit).
    pub fn costs(&self) -> f64 {
        self.captation_cost + self.edition_cost
    }
}

/// Aggregated financials over a set of projects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceTotals {
    pub project_count: i64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_margin: f64,
}

/// Margin of a single project: price minus both production costs.
pub fn margin(client_price: f64, captation_cost: f64, edition_cost: f64) -> f64 {
    client_price - captation_cost - edition_cost
}

/// Aggregate revenue, costs, and margin over a project collection.
///
/// The empty set yields all-zero totals.
pub fn totals(projects: &[ProjectFinancials]) -> FinanceTotals {
    let total_revenue: f64 = projects.iter().map(|p| p.client_price).sum();
    let total_costs: f64 = projects.iter().map(|p| p.costs()).sum();
    FinanceTotals {
        project_count: projects.len() as i64,
        total_revenue,
        total_costs,
        total_margin: total_revenue - total_costs,
    }
}
