//! Repository for the `notes` table.

use sqlx::PgPool;

use crate::models::note::{CreateNote, Note};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, sender_id, recipient_id, created_at";

/// Provides insert and scoped listing for notes. There is no update or delete.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, body, sender_id, recipient_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.sender_id)
            .bind(&input.recipient_id)
            .fetch_one(pool)
            .await
    }

    /// Notes addressed to `recipient_id`, newest first.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient_id: &str,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE recipient_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(recipient_id)
            .fetch_all(pool)
            .await
    }

    /// Notes written by `sender_id`, newest first.
    pub async fn list_by_sender(pool: &PgPool, sender_id: &str) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE sender_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(sender_id)
            .fetch_all(pool)
            .await
    }
}
