//! Issued-session model.

use slotbook_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `sessions` table, keyed by the token's `jti` claim.
#[derive(Debug, Clone, FromRow)]
pub struct SessionRecord {
    pub jti: String,
    pub account_id: UserId,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording an issued session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub jti: String,
    pub account_id: UserId,
    pub expires_at: Timestamp,
}
