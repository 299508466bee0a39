//! Per-request route gate.
//!
//! Resolves the session and role afresh for every request, asks
//! [`decide`] what to do, then either redirects or hands the request on
//! with an [`AuthUser`] in its extensions.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use slotbook_core::access::{decide, Principal};

use super::auth::{bearer_token, AuthUser};
use crate::state::AppState;

pub async fn route_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let session = match bearer_token(request.headers()) {
        Some(token) => match state.identity.current_session(token).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Error fetching session");
                None
            }
        },
        None => None,
    };

    let (principal, user) = match session {
        None => (Principal::Anonymous, None),
        Some(session) => {
            let role = state.roles().resolve(&session.user_id).await;
            let user = AuthUser {
                user_id: session.user_id,
                email: session.email,
                role,
                access_token: session.access_token,
            };
            (Principal::Authenticated(role), Some(user))
        }
    };

    let outcome = decide(&path, principal);
    tracing::debug!(path = %path, ?principal, ?outcome, "Route gate decision");

    match outcome.location() {
        None => {
            if let Some(user) = user {
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
        Some(location) => {
            tracing::info!(
                path = %path,
                user_id = user.as_ref().map(|u| u.user_id.as_str()),
                location,
                "Request redirected by route gate"
            );
            Redirect::to(location).into_response()
        }
    }
}
