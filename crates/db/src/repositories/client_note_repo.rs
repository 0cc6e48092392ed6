//! Repository for the `client_notes` table.

use lumeo_core::communications::DEFAULT_AUTHOR;
use lumeo_core::types::DbId;
use sqlx::PgPool;

use crate::models::client_note::{ClientNote, CreateClientNote};

const COLUMNS: &str = "id, client_id, content, created_by, created_at";

/// Provides append and list operations for a client's notes.
pub struct ClientNoteRepo;

impl ClientNoteRepo {
    /// Append a note to a client, returning the created row.
    ///
    /// `created_by` falls back to the placeholder identity when omitted.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateClientNote,
    ) -> Result<ClientNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_notes (client_id, content, created_by)
             VALUES ($1, $2, COALESCE($3, $4))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientNote>(&query)
            .bind(client_id)
            .bind(&input.content)
            .bind(&input.created_by)
            .bind(DEFAULT_AUTHOR)
            .fetch_one(pool)
            .await
    }

    /// List a client's notes, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ClientNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_notes
             WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ClientNote>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }
}
