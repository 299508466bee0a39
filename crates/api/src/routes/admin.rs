//! Route definitions mounted at `/admin`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::slots;
use crate::state::AppState;

/// ```text
/// GET    /             -> admin_slots
/// GET    /slots        -> admin_slots
/// POST   /slots        -> create_slot
/// PUT    /slots/{id}   -> update_slot
/// DELETE /slots/{id}   -> delete_slot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(slots::admin_slots))
        .route("/slots", get(slots::admin_slots).post(slots::create_slot))
        .route(
            "/slots/{id}",
            put(slots::update_slot).delete(slots::delete_slot),
        )
}
