//! Handlers for sending and reading notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /notes`. Missing fields fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default)]
    pub recipient_id: String,
}

/// GET /notes
pub async fn list_notes(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.notes().list_notes(&auth).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /notes
pub async fn create_note(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes()
        .create_note(&admin, &input.title, &input.body, &input.recipient_id)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes/recipients
pub async fn list_recipients(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = state.notes().list_recipients().await?;
    Ok(Json(DataResponse { data: users }))
}
