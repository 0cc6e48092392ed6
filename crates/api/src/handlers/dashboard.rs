//! Handler for the `/dashboard` aggregate snapshot.

use axum::extract::State;
use axum::Json;
use lumeo_db::models::communication::Communication;
use lumeo_db::repositories::dashboard_repo::DashboardSnapshot;
use lumeo_db::repositories::{CommunicationRepo, DashboardRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

/// How many recent communications the dashboard feed shows.
const RECENT_COMMUNICATIONS: i64 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(flatten)]
    pub snapshot: DashboardSnapshot,
    pub recent_communications: Vec<Communication>,
}

/// GET /api/dashboard
///
/// Project counts per phase, overall financial totals, and the most recent
/// communications, all recomputed per request.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Envelope<Dashboard>>> {
    let snapshot = DashboardRepo::snapshot(&state.pool).await?;
    let recent_communications =
        CommunicationRepo::recent(&state.pool, RECENT_COMMUNICATIONS).await?;

    Ok(Envelope::ok(Dashboard {
        snapshot,
        recent_communications,
    }))
}
