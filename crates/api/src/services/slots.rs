//! Slot inventory and booking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slotbook_core::error::CoreError;
use slotbook_core::scheduling::normalize_slot_time;
use slotbook_core::types::{DbId, Timestamp};
use slotbook_db::models::slot::Slot;
use slotbook_db::store::RecordStore;

use super::store_failure;
use crate::middleware::auth::AuthUser;

/// Date and time as entered by the caller, plus the caller's UTC offset.
#[derive(Debug, Default, Deserialize)]
pub struct SlotTimeInput {
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: Option<String>,
    /// Minutes east of UTC. Falls back to the server default when absent.
    pub utc_offset_minutes: Option<i32>,
}

/// Result of a booking attempt. Callers only log it; the HTTP response is
/// the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    /// Already held by someone, or the slot no longer exists.
    Unavailable,
}

/// Admin page: every slot, split by availability.
#[derive(Debug, Serialize)]
pub struct AdminSlotView {
    pub available: Vec<Slot>,
    pub booked: Vec<Slot>,
}

/// User page: open slots and the caller's own bookings.
#[derive(Debug, Serialize)]
pub struct UserSlotView {
    pub available: Vec<Slot>,
    pub booked_by_me: Vec<Slot>,
}

pub struct SlotManager {
    store: Arc<dyn RecordStore>,
    default_utc_offset_minutes: i32,
}

impl SlotManager {
    pub fn new(store: Arc<dyn RecordStore>, default_utc_offset_minutes: i32) -> Self {
        Self {
            store,
            default_utc_offset_minutes,
        }
    }

    /// All slots, earliest first.
    pub async fn list_slots(&self) -> Result<Vec<Slot>, CoreError> {
        self.store
            .list_slots()
            .await
            .map_err(store_failure("list_slots"))
    }

    pub async fn admin_view(&self) -> Result<AdminSlotView, CoreError> {
        let (available, booked) = self
            .list_slots()
            .await?
            .into_iter()
            .partition(Slot::is_available);
        Ok(AdminSlotView { available, booked })
    }

    pub async fn user_view(&self, user: &AuthUser) -> Result<UserSlotView, CoreError> {
        let slots = self.list_slots().await?;
        let mut available = Vec::new();
        let mut booked_by_me = Vec::new();
        for slot in slots {
            match slot.booked_by.as_deref() {
                None => available.push(slot),
                Some(holder) if holder == user.email => booked_by_me.push(slot),
                Some(_) => {}
            }
        }
        Ok(UserSlotView {
            available,
            booked_by_me,
        })
    }

    pub async fn create_slot(&self, input: &SlotTimeInput) -> Result<Slot, CoreError> {
        let slot_time = self.normalize(input)?;
        let slot = self
            .store
            .insert_slot(slot_time)
            .await
            .map_err(store_failure("insert_slot"))?;
        tracing::info!(slot_id = slot.id, slot_time = %slot.slot_time, "Slot created");
        Ok(slot)
    }

    /// Reschedule a slot. The booking holder is not reset.
    pub async fn update_slot(&self, id: DbId, input: &SlotTimeInput) -> Result<Slot, CoreError> {
        let slot_time = self.normalize(input)?;
        let slot = self
            .store
            .update_slot_time(id, slot_time)
            .await
            .map_err(store_failure("update_slot_time"))?
            .ok_or(CoreError::NotFound { entity: "Slot", id })?;
        tracing::info!(slot_id = id, slot_time = %slot.slot_time, "Slot rescheduled");
        Ok(slot)
    }

    /// Delete without checking that the slot exists.
    pub async fn delete_slot(&self, id: DbId) -> Result<(), CoreError> {
        let removed = self
            .store
            .delete_slot(id)
            .await
            .map_err(store_failure("delete_slot"))?;
        tracing::info!(slot_id = id, removed, "Slot delete requested");
        Ok(())
    }

    /// Book `id` for `user` if nobody holds it yet.
    pub async fn book_slot(&self, id: DbId, user: &AuthUser) -> Result<BookingOutcome, CoreError> {
        let booked = self
            .store
            .book_if_available(id, &user.email)
            .await
            .map_err(store_failure("book_if_available"))?;

        let outcome = if booked {
            BookingOutcome::Booked
        } else {
            BookingOutcome::Unavailable
        };
        tracing::info!(slot_id = id, user_id = %user.user_id, ?outcome, "Booking attempt");
        Ok(outcome)
    }

    fn normalize(&self, input: &SlotTimeInput) -> Result<Timestamp, CoreError> {
        normalize_slot_time(
            input.date.as_deref(),
            input.time.as_deref(),
            input
                .utc_offset_minutes
                .unwrap_or(self.default_utc_offset_minutes),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use slotbook_core::roles::{Role, RoleResolution};
    use slotbook_db::memory::MemoryStore;
    use slotbook_db::store::SlotStore;

    use super::*;

    fn manager() -> (Arc<MemoryStore>, SlotManager) {
        let store = Arc::new(MemoryStore::new());
        (Arc::clone(&store), SlotManager::new(store, 0))
    }

    fn input(date: &str, time: &str, offset: Option<i32>) -> SlotTimeInput {
        SlotTimeInput {
            date: Some(date.into()),
            time: Some(time.into()),
            utc_offset_minutes: offset,
        }
    }

    fn user(name: &str) -> AuthUser {
        AuthUser {
            user_id: name.into(),
            email: format!("{name}@example.com"),
            role: RoleResolution::Resolved(Role::User),
            access_token: "t".into(),
        }
    }

    #[tokio::test]
    async fn create_persists_utc_instant() {
        let (_, slots) = manager();
        let slot = slots
            .create_slot(&input("2025-01-10", "09:30", Some(420)))
            .await
            .unwrap();
        assert_eq!(slot.slot_time, "2025-01-10T02:30:00Z".parse::<Timestamp>().unwrap());
        assert!(slot.is_available());
    }

    #[tokio::test]
    async fn missing_time_writes_nothing() {
        let (store, slots) = manager();
        let err = slots
            .create_slot(&SlotTimeInput {
                date: Some("2025-01-10".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(store.list_slots().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_uses_same_normalization_as_create() {
        let (_, slots) = manager();
        let created = slots
            .create_slot(&input("2025-01-10", "09:30", Some(-300)))
            .await
            .unwrap();
        let updated = slots
            .update_slot(created.id, &input("2025-01-10", "09:30", Some(-300)))
            .await
            .unwrap();
        assert_eq!(created.slot_time, updated.slot_time);
    }

    #[tokio::test]
    async fn default_offset_applies_when_absent() {
        let store = Arc::new(MemoryStore::new());
        let slots = SlotManager::new(store, 60);
        let slot = slots
            .create_slot(&input("2025-01-10", "09:30", None))
            .await
            .unwrap();
        assert_eq!(slot.slot_time, "2025-01-10T08:30:00Z".parse::<Timestamp>().unwrap());
    }

    #[tokio::test]
    async fn update_missing_slot_not_found() {
        let (_, slots) = manager();
        let err = slots
            .update_slot(77, &input("2025-01-10", "09:30", None))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Slot", id: 77 });
    }

    #[tokio::test]
    async fn update_keeps_booking() {
        let (_, slots) = manager();
        let slot = slots.create_slot(&input("2025-01-10", "09:30", None)).await.unwrap();
        slots.book_slot(slot.id, &user("ana")).await.unwrap();

        let moved = slots
            .update_slot(slot.id, &input("2025-01-11", "10:00", None))
            .await
            .unwrap();
        assert_eq!(moved.booked_by.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn delete_missing_slot_is_ok() {
        let (_, slots) = manager();
        assert!(slots.delete_slot(12345).await.is_ok());
    }

    #[tokio::test]
    async fn second_booking_is_unavailable() {
        let (_, slots) = manager();
        let slot = slots.create_slot(&input("2025-03-01", "10:00", None)).await.unwrap();

        assert_eq!(
            slots.book_slot(slot.id, &user("ana")).await.unwrap(),
            BookingOutcome::Booked
        );
        assert_eq!(
            slots.book_slot(slot.id, &user("bob")).await.unwrap(),
            BookingOutcome::Unavailable
        );

        let ana = slots.user_view(&user("ana")).await.unwrap();
        let bob = slots.user_view(&user("bob")).await.unwrap();
        assert_eq!(ana.booked_by_me.len(), 1);
        assert!(bob.booked_by_me.is_empty());
        assert!(bob.available.is_empty());
    }

    #[tokio::test]
    async fn admin_view_partitions_by_availability() {
        let (_, slots) = manager();
        let a = slots.create_slot(&input("2025-03-01", "10:00", None)).await.unwrap();
        let b = slots.create_slot(&input("2025-03-01", "09:00", None)).await.unwrap();
        slots.book_slot(a.id, &user("ana")).await.unwrap();

        let view = slots.admin_view().await.unwrap();
        assert_eq!(view.available.iter().map(|s| s.id).collect::<Vec<_>>(), vec![b.id]);
        assert_eq!(view.booked.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a.id]);
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_store_error() {
        let (store, slots) = manager();
        store.set_unavailable(true);
        assert_matches!(slots.list_slots().await, Err(CoreError::Store(_)));
    }
}
