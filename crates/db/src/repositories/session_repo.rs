//! Repository for the `sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, SessionRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "jti, account_id, expires_at, revoked_at, created_at";

/// Tracks issued session tokens so they can be revoked on sign-out.
pub struct SessionRepo;

impl SessionRepo {
    /// Record an issued session.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO sessions (jti, account_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&input.jti)
            .bind(&input.account_id)
            .bind(input.expires_at)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find a session that is neither revoked nor expired.
    pub async fn find_active(pool: &PgPool, jti: &str) -> Result<Option<SessionRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE jti = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, SessionRecord>(&query)
            .bind(jti)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, jti: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW() WHERE jti = $1 AND revoked_at IS NULL",
        )
        .bind(jti)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
