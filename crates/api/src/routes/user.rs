//! Route definitions mounted at `/user`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::slots;
use crate::state::AppState;

/// ```text
/// GET  /                  -> user_slots
/// GET  /slots             -> user_slots
/// POST /slots/{id}/book   -> book_slot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(slots::user_slots))
        .route("/slots", get(slots::user_slots))
        .route("/slots/{id}/book", post(slots::book_slot))
}
