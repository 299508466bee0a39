//! Handlers for the role chooser and the access-denied page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use slotbook_core::error::CoreError;
use slotbook_core::roles::Role;
use slotbook_core::types::UserId;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct ChooseRoleRequest {
    pub role: String,
}

/// The caller's role and the page they belong on.
#[derive(Debug, Serialize)]
pub struct RoleView {
    pub user_id: UserId,
    pub email: String,
    /// `None` until a role has been chosen.
    pub role: Option<Role>,
    pub redirect_to: Option<&'static str>,
}

impl RoleView {
    fn new(auth: &AuthUser, role: Option<Role>) -> Self {
        Self {
            user_id: auth.user_id.clone(),
            email: auth.email.clone(),
            role,
            redirect_to: role.map(Role::home_path),
        }
    }
}

/// GET /
pub async fn current_role(auth: AuthUser) -> AppResult<impl IntoResponse> {
    let view = RoleView::new(&auth, auth.role.role());
    Ok(Json(DataResponse { data: view }))
}

/// POST /
///
/// Record the caller's role the first time they pick one.
pub async fn choose_role(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChooseRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let role: Role = input
        .role
        .parse()
        .map_err(|e: String| AppError::Core(CoreError::Validation(e)))?;

    state.roles().choose_role(&auth, role).await?;

    Ok(Json(DataResponse {
        data: RoleView::new(&auth, Some(role)),
    }))
}

/// GET /forbidden
pub async fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden(
        "You do not have permission to view this page".into(),
    ))
}
