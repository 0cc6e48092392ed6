//! Repository for the `communications` table.

use lumeo_core::communications::{DEFAULT_AUTHOR, STATUS_PENDING};
use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::communication::{Communication, CreateCommunication};

const COLUMNS: &str = "id, client_id, type, subject, content, status, sent_by, sent_at";

/// Provides append and list operations for a client's communication log.
pub struct CommunicationRepo;

impl CommunicationRepo {
    /// Append a communication to a client's log, returning the created row.
    ///
    /// Server-assigned defaults: `status` falls back to `pending`, `sent_by`
    /// to the placeholder identity.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateCommunication,
    ) -> Result<Communication, sqlx::Error> {
        let query = format!(
            "INSERT INTO communications (client_id, type, subject, content, status, sent_by)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6), COALESCE($7, $8))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(client_id)
            .bind(&input.comm_type)
            .bind(&input.subject)
            .bind(&input.content)
            .bind(&input.status)
            .bind(STATUS_PENDING)
            .bind(&input.sent_by)
            .bind(DEFAULT_AUTHOR)
            .fetch_one(pool)
            .await
    }

    /// List a client's communications, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Communication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM communications
             WHERE client_id = $1
             ORDER BY sent_at DESC, id DESC"
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Most recent communications across all clients, for the dashboard feed.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Communication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM communications
             ORDER BY sent_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
