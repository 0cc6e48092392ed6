//! Client note entity model and DTO.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row: one entry in a client's append-only note list.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientNote {
    pub id: DbId,
    pub client_id: DbId,
    pub content: String,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// DTO for appending a note to a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientNote {
    pub content: String,
    pub created_by: Option<String>,
}
