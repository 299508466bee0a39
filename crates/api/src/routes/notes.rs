//! Route definitions mounted at `/notes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// ```text
/// GET  /             -> list_notes
/// POST /             -> create_note (admin only)
/// GET  /recipients   -> list_recipients (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/recipients", get(notes::list_recipients))
}
