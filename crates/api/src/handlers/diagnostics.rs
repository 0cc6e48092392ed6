//! Diagnostic handler for `/test`: storage statistics.

use axum::extract::State;
use axum::Json;
use lumeo_db::StorageStats;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub tables: StorageStats,
    pub pool_size: u32,
    pub pool_idle: usize,
}

/// GET /api/test -- row counts per table plus connection pool stats.
pub async fn diagnostics(State(state): State<AppState>) -> AppResult<Json<Envelope<Diagnostics>>> {
    let tables = lumeo_db::storage_stats(&state.pool).await?;

    Ok(Envelope::ok(Diagnostics {
        tables,
        pool_size: state.pool.size(),
        pool_idle: state.pool.num_idle(),
    }))
}
