pub mod admin;
pub mod auth;
pub mod health;
pub mod home;
pub mod notes;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the gated application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                            role chooser (GET, POST)
/// /forbidden                   access denied
///
/// /login                       sign in (public)
/// /signup                      create account (public)
/// /logout                      revoke session
///
/// /admin                       slot inventory (admin only)
/// /admin/slots                 list, create
/// /admin/slots/{id}            reschedule, delete
///
/// /user                        slot booking page
/// /user/slots                  available + own bookings
/// /user/slots/{id}/book        book (POST)
///
/// /notes                       list, send (send is admin only)
/// /notes/recipients            users a note can go to (admin only)
/// ```
///
/// `/health` is not part of this tree; it is merged outside the gate.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(auth::router())
        .nest("/admin", admin::router())
        .nest("/user", user::router())
        .nest("/notes", notes::router())
}
