//! Handlers for sign-up, login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use slotbook_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /login` and `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsRequest {
    fn require_fields(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Email and password are required".into(),
            )));
        }
        Ok(())
    }
}

/// POST /signup
///
/// Create an account and return its first session.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    input.require_fields()?;
    let session = state.identity.sign_up(&input.email, &input.password).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    input.require_fields()?;
    let session = state
        .identity
        .sign_in_with_password(&input.email, &input.password)
        .await?;

    tracing::info!(user_id = %session.user_id, "User logged in");

    Ok(Json(DataResponse { data: session }))
}

/// POST /logout
///
/// Revoke the session the request was made with.
pub async fn logout(auth: AuthUser, State(state): State<AppState>) -> AppResult<StatusCode> {
    state.identity.sign_out(&auth.access_token).await?;

    tracing::info!(user_id = %auth.user_id, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}
