//! Note entity model and DTOs.

use serde::Serialize;
use slotbook_core::types::{DbId, Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `notes` table. Notes are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub created_at: Timestamp,
}

/// DTO for inserting a validated note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub sender_id: UserId,
    pub recipient_id: UserId,
}
