//! Domain-level error taxonomy shared by the `db` and `api` crates.

use crate::types::DbId;

/// Domain error for CRM operations.
///
/// The HTTP mapping lives in the `api` crate: `Validation` and `Conflict`
/// both map to 400 (the documented API contract uses 400 for conflicts,
/// not 409), `NotFound` to 404, `Unauthorized`/`Forbidden` to 401/403,
/// and `Internal` to a sanitized 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a field value is invalid.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness or dependent-record constraint was violated.
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("{0}")]
    Forbidden(String),

    /// Unexpected internal failure. Logged server-side, never shown verbatim.
    #[error("{0}")]
    Internal(String),
}
