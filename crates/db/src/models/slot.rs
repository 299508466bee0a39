//! Slot entity model.

use serde::Serialize;
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `slots` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Slot {
    pub id: DbId,
    /// Scheduled instant, always UTC.
    pub slot_time: Timestamp,
    /// Email of the principal holding the booking. `None` means available.
    pub booked_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.booked_by.is_none()
    }
}
