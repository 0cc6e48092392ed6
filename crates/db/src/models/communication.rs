//! Communication entity model and DTOs.

use lumeo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A communication row: one entry in a client's append-only contact log.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: DbId,
    pub client_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub comm_type: String,
    pub subject: String,
    pub content: Option<String>,
    pub status: String,
    pub sent_by: String,
    pub sent_at: Timestamp,
}

/// DTO for appending a communication to a client's log.
///
/// `status` defaults to `pending` and `sentBy` to the placeholder identity
/// when the caller omits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunication {
    #[serde(rename = "type")]
    pub comm_type: String,
    pub subject: String,
    pub content: Option<String>,
    pub status: Option<String>,
    pub sent_by: Option<String>,
}
