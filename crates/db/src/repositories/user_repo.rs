//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{NewUser, UserRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, role, username, created_at";

/// Provides role lookups and first-time role selection.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by principal id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user unless one already exists with the same id.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on
    /// conflict, so the role is written at most once per id.
    pub async fn insert_if_absent(
        pool: &PgPool,
        input: &NewUser,
    ) -> Result<UserRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, role, username)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET id = users.id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRecord>(&query)
            .bind(&input.id)
            .bind(input.role.as_str())
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }

    /// List users holding `role`, ordered by username.
    pub async fn list_by_role(pool: &PgPool, role: &str) -> Result<Vec<UserRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE role = $1 ORDER BY username, id");
        sqlx::query_as::<_, UserRecord>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }
}
