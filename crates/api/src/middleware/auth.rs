//! Authenticated principal extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use slotbook_core::error::CoreError;
use slotbook_core::roles::RoleResolution;
use slotbook_core::types::UserId;

use crate::error::AppError;

/// The principal admitted by [`route_gate`](super::gate::route_gate).
///
/// The gate stores it in the request extensions after resolving the session
/// and role, so handlers never repeat those lookups:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity provider's id for the principal.
    pub user_id: UserId,
    pub email: String,
    /// Role as resolved for this request.
    pub role: RoleResolution,
    /// Bearer token the request carried.
    pub access_token: String,
}

impl AuthUser {
    /// Email local part, used as the display name.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })
    }
}

/// Token from an `Authorization: Bearer <token>` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn bearer_token_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn other_schemes_ignored() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }

    fn user(email: &str) -> AuthUser {
        AuthUser {
            user_id: "u-1".into(),
            email: email.into(),
            role: RoleResolution::Unassigned,
            access_token: "t".into(),
        }
    }

    #[test]
    fn display_name_is_local_part() {
        assert_eq!(user("ana@example.com").display_name(), "ana");
    }

    #[test]
    fn display_name_without_at_sign_is_whole_email() {
        assert_eq!(user("ana").display_name(), "ana");
    }
}
