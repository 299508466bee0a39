//! Role resolution and first-time role selection.

use std::sync::Arc;

use slotbook_core::error::CoreError;
use slotbook_core::roles::{Role, RoleResolution};
use slotbook_db::models::user::{NewUser, UserRecord};
use slotbook_db::store::RecordStore;

use super::store_failure;
use crate::middleware::auth::AuthUser;

pub struct RoleResolver {
    store: Arc<dyn RecordStore>,
}

impl RoleResolver {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Look up the role for `user_id` with a single live read.
    ///
    /// Never fails: a store error or an unrecognised stored value becomes
    /// [`RoleResolution::Unknown`], which callers must treat as unprivileged.
    pub async fn resolve(&self, user_id: &str) -> RoleResolution {
        match self.store.find_user(user_id).await {
            Ok(Some(row)) => {
                let resolution = row.role_resolution();
                if resolution == RoleResolution::Unknown {
                    tracing::warn!(user_id, role = %row.role, "Stored role is not recognised");
                }
                resolution
            }
            Ok(None) => RoleResolution::Unassigned,
            Err(e) => {
                tracing::error!(user_id, error = %e, "Error fetching user role");
                RoleResolution::Unknown
            }
        }
    }

    /// Record the caller's role choice. The role can be set once; choosing
    /// the same role again is a no-op, choosing a different one conflicts.
    pub async fn choose_role(&self, user: &AuthUser, role: Role) -> Result<UserRecord, CoreError> {
        let input = NewUser {
            id: user.user_id.clone(),
            role,
            username: user.display_name().to_string(),
        };
        let row = self
            .store
            .insert_user_if_absent(&input)
            .await
            .map_err(store_failure("insert_user_if_absent"))?;

        if row.role != role.as_str() {
            return Err(CoreError::Conflict(format!(
                "Role already set to '{}'",
                row.role
            )));
        }

        tracing::info!(user_id = %row.id, role = %role, "Role selected");
        Ok(row)
    }
}
