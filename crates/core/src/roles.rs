//! Role names and role-resolution outcomes.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20250101000001_create_users_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Role attribute stored on a `users` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Landing page the role chooser sends this role to.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::User => "/user",
            Role::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(Role::User),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_USER}, {ROLE_ADMIN}"
            )),
        }
    }
}

/// Result of looking up a principal's role in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleResolution {
    /// A `users` row exists with a valid role.
    Resolved(Role),
    /// No `users` row yet (role not chosen). Treated as non-admin.
    Unassigned,
    /// The lookup failed or returned garbage. Never treated as privileged.
    Unknown,
}

impl RoleResolution {
    pub fn is_admin(self) -> bool {
        matches!(self, RoleResolution::Resolved(Role::Admin))
    }

    pub fn role(self) -> Option<Role> {
        match self {
            RoleResolution::Resolved(role) => Some(role),
            _ => None,
        }
    }
}
