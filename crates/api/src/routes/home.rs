use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// ```text
/// GET  /           -> current_role
/// POST /           -> choose_role
/// GET  /forbidden  -> forbidden
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::current_role).post(home::choose_role))
        .route("/forbidden", get(home::forbidden))
}
