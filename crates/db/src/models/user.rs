//! User entity model and DTOs.

use serde::Serialize;
use slotbook_core::roles::{Role, RoleResolution};
use slotbook_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `users` table: the role a principal chose.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    /// Stored role name (`"user"` or `"admin"`).
    pub role: String,
    pub username: String,
    pub created_at: Timestamp,
}

impl UserRecord {
    /// Interpret the stored role. A value outside the known set is `Unknown`.
    pub fn role_resolution(&self) -> RoleResolution {
        match self.role.parse::<Role>() {
            Ok(role) => RoleResolution::Resolved(role),
            Err(_) => RoleResolution::Unknown,
        }
    }
}

/// DTO for the first role selection of a principal.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub role: Role,
    pub username: String,
}
