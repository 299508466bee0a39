//! Identity capability consumed by the gate and the auth handlers.
//!
//! The service never issues or stores credentials itself; it asks an
//! [`IdentityProvider`] for the session behind a bearer token. Implementations
//! are injected through application state so tests can swap in fakes.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Timestamp, UserId};

/// Proof of authentication issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    /// Bearer token the client presents on subsequent requests.
    pub access_token: String,
    pub expires_at: Timestamp,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the session behind `token`.
    ///
    /// `Ok(None)` means the token is unknown, expired or revoked. `Err` means
    /// the provider could not answer; callers treat that as no session.
    async fn current_session(&self, token: &str) -> Result<Option<Session>, CoreError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, CoreError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, CoreError>;

    /// Revoke the session behind `token`. Unknown tokens are ignored.
    async fn sign_out(&self, token: &str) -> Result<(), CoreError>;
}
