//! Shared response envelope for API handlers.
//!
//! Every endpoint answers with `{ "success": bool, "data": ..., "message"?:
//! ... }` on success and `{ "success": false, "error": ..., "code": ... }` on
//! failure (see [`crate::error::AppError`]). Use [`Envelope`] instead of
//! ad-hoc `serde_json::json!` so the shape stays consistent.

use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// `{ "success": true, "data": ... }`
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: None,
        })
    }

    /// `{ "success": true, "data": ..., "message": ... }`
    pub fn with_message(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: Some(message.into()),
        })
    }
}
