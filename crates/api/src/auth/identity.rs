//! Password-based identity provider.
//!
//! Accounts and issued sessions live in an [`AccountStore`]; passwords are
//! stored as Argon2id hashes and sessions are HS256 JWTs whose `jti` must
//! still be active in the store for the session to count.

use std::sync::Arc;

use async_trait::async_trait;
use slotbook_core::error::CoreError;
use slotbook_core::identity::{IdentityProvider, Session};
use slotbook_db::models::account::{Account, CreateAccount};
use slotbook_db::models::session::CreateSession;
use slotbook_db::store::AccountStore;
use uuid::Uuid;

use crate::auth::jwt::{generate_session_token, validate_token, JwtConfig};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

pub struct PasswordIdentity {
    accounts: Arc<dyn AccountStore>,
    jwt: JwtConfig,
    min_password_length: usize,
}

impl PasswordIdentity {
    pub fn new(accounts: Arc<dyn AccountStore>, jwt: JwtConfig, min_password_length: usize) -> Self {
        Self {
            accounts,
            jwt,
            min_password_length,
        }
    }

    /// Sign a token for `account` and record its `jti`.
    async fn issue_session(&self, account: &Account) -> Result<Session, CoreError> {
        let (access_token, claims) = generate_session_token(&account.id, &account.email, &self.jwt)
            .map_err(|e| CoreError::Internal(format!("Token generation error: {e}")))?;

        let expires_at = claims.expires_at();
        self.accounts
            .create_session(&CreateSession {
                jti: claims.jti,
                account_id: account.id.clone(),
                expires_at,
            })
            .await?;

        Ok(Session {
            user_id: account.id.clone(),
            email: account.email.clone(),
            access_token,
            expires_at,
        })
    }
}

/// Emails are matched case-insensitively and without surrounding whitespace.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(CoreError::Validation(format!(
            "Unable to validate email address: invalid format '{email}'"
        )));
    }
    Ok(())
}

#[async_trait]
impl IdentityProvider for PasswordIdentity {
    async fn current_session(&self, token: &str) -> Result<Option<Session>, CoreError> {
        let claims = match validate_token(token, &self.jwt) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                return Ok(None);
            }
        };

        if !self.accounts.is_session_active(&claims.jti).await? {
            return Ok(None);
        }

        Ok(Some(Session {
            expires_at: claims.expires_at(),
            user_id: claims.sub,
            email: claims.email,
            access_token: token.to_string(),
        }))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, CoreError> {
        let email = normalize_email(email);
        let account = self
            .accounts
            .find_account_by_email(&email)
            .await?
            .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

        let valid = verify_password(password, &account.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))?;
        if !valid {
            tracing::info!(user_id = %account.id, "Password sign-in rejected");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        self.issue_session(&account).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, CoreError> {
        let email = normalize_email(email);
        validate_email(&email)?;
        validate_password_strength(password, self.min_password_length)
            .map_err(CoreError::Validation)?;

        let password_hash = hash_password(password)
            .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))?;

        let account = self
            .accounts
            .create_account(&CreateAccount {
                id: Uuid::new_v4().to_string(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match CoreError::from(e) {
                CoreError::Conflict(_) => CoreError::Conflict("User already registered".into()),
                other => other,
            })?;

        tracing::info!(user_id = %account.id, "Account created");
        self.issue_session(&account).await
    }

    async fn sign_out(&self, token: &str) -> Result<(), CoreError> {
        let Ok(claims) = validate_token(token, &self.jwt) else {
            return Ok(());
        };
        if self.accounts.revoke_session(&claims.jti).await? {
            tracing::info!(user_id = %claims.sub, "Session revoked");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use slotbook_db::memory::MemoryStore;

    use super::*;

    fn provider() -> PasswordIdentity {
        let jwt = JwtConfig {
            secret: "identity-test-secret".into(),
            session_expiry_mins: 15,
        };
        PasswordIdentity::new(Arc::new(MemoryStore::new()), jwt, 6)
    }

    #[tokio::test]
    async fn sign_up_returns_usable_session() {
        let identity = provider();
        let session = identity.sign_up(" Ana@Example.com ", "secret1").await.unwrap();
        assert_eq!(session.email, "ana@example.com");

        let current = identity
            .current_session(&session.access_token)
            .await
            .unwrap()
            .expect("fresh session should be active");
        assert_eq!(current.user_id, session.user_id);
    }

    #[tokio::test]
    async fn duplicate_sign_up_conflicts() {
        let identity = provider();
        identity.sign_up("ana@example.com", "secret1").await.unwrap();
        let err = identity.sign_up("ANA@example.com", "secret2").await.unwrap_err();
        assert_matches!(err, CoreError::Conflict(msg) if msg == "User already registered");
    }

    #[tokio::test]
    async fn weak_password_and_bad_email_rejected() {
        let identity = provider();
        assert_matches!(
            identity.sign_up("ana@example.com", "123").await,
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            identity.sign_up("not-an-email", "secret1").await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn sign_in_checks_password() {
        let identity = provider();
        identity.sign_up("ana@example.com", "secret1").await.unwrap();

        assert!(identity.sign_in_with_password("ana@example.com", "secret1").await.is_ok());
        assert_matches!(
            identity.sign_in_with_password("ana@example.com", "wrong!!").await,
            Err(CoreError::Unauthorized(_))
        );
        assert_matches!(
            identity.sign_in_with_password("bob@example.com", "secret1").await,
            Err(CoreError::Unauthorized(_))
        );
    }

    #[tokio::test]
    async fn sign_out_revokes_only_that_session() {
        let identity = provider();
        let first = identity.sign_up("ana@example.com", "secret1").await.unwrap();
        let second = identity
            .sign_in_with_password("ana@example.com", "secret1")
            .await
            .unwrap();

        identity.sign_out(&first.access_token).await.unwrap();

        assert!(identity.current_session(&first.access_token).await.unwrap().is_none());
        assert!(identity.current_session(&second.access_token).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn garbage_token_has_no_session() {
        let identity = provider();
        assert!(identity.current_session("garbage").await.unwrap().is_none());
        assert!(identity.sign_out("garbage").await.is_ok());
    }
}
