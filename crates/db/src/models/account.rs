//! Credential account model (identity provider side).

use slotbook_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `accounts` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}
