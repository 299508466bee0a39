//! Handlers for the admin slot inventory and user booking pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use slotbook_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::services::slots::SlotTimeInput;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /admin/slots
pub async fn admin_slots(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let view = state.slots().admin_view().await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /admin/slots
pub async fn create_slot(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SlotTimeInput>,
) -> AppResult<impl IntoResponse> {
    let slot = state.slots().create_slot(&input).await?;

    tracing::debug!(slot_id = slot.id, user_id = %admin.user_id, "Slot created by admin");

    Ok((StatusCode::CREATED, Json(DataResponse { data: slot })))
}

/// PUT /admin/slots/{id}
pub async fn update_slot(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
    Json(input): Json<SlotTimeInput>,
) -> AppResult<impl IntoResponse> {
    let slot = state.slots().update_slot(slot_id, &input).await?;
    Ok(Json(DataResponse { data: slot }))
}

/// DELETE /admin/slots/{id}
pub async fn delete_slot(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.slots().delete_slot(slot_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// GET /user/slots
pub async fn user_slots(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let view = state.slots().user_view(&auth).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /user/slots/{id}/book
///
/// Responds `204` whether or not the slot was still free.
pub async fn book_slot(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.slots().book_slot(slot_id, &auth).await?;
    Ok(StatusCode::NO_CONTENT)
}
