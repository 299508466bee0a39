//! Repository for the `slots` table.

use slotbook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::slot::Slot;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slot_time, booked_by, created_at, updated_at";

/// Provides CRUD operations and the conditional booking update for slots.
pub struct SlotRepo;

impl SlotRepo {
    /// List every slot ordered by scheduled time (earliest first).
    pub async fn list(pool: &PgPool) -> Result<Vec<Slot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots ORDER BY slot_time ASC, id ASC");
        sqlx::query_as::<_, Slot>(&query).fetch_all(pool).await
    }

    /// Insert an available slot at `slot_time`.
    pub async fn create(pool: &PgPool, slot_time: Timestamp) -> Result<Slot, sqlx::Error> {
        let query = format!(
            "INSERT INTO slots (slot_time, booked_by)
             VALUES ($1, NULL)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(slot_time)
            .fetch_one(pool)
            .await
    }

    /// Reschedule a slot. The booking holder is left unchanged.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_time(
        pool: &PgPool,
        id: DbId,
        slot_time: Timestamp,
    ) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!(
            "UPDATE slots SET slot_time = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .bind(slot_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slot. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Book a slot only if nobody holds it yet.
    ///
    /// The `booked_by IS NULL` predicate is evaluated under the row lock, so
    /// of several concurrent callers exactly one sees `true`.
    pub async fn book_if_available(
        pool: &PgPool,
        id: DbId,
        holder: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE slots SET booked_by = $2, updated_at = NOW()
             WHERE id = $1 AND booked_by IS NULL",
        )
        .bind(id)
        .bind(holder)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
