//! Record-store capability traits.
//!
//! Services depend on these traits rather than on a concrete client so the
//! Postgres adapter ([`crate::postgres::PgStore`]) and the in-memory adapter
//! ([`crate::memory::MemoryStore`]) are interchangeable.

use async_trait::async_trait;
use slotbook_core::types::{DbId, Timestamp};

use crate::error::StoreResult;
use crate::models::account::{Account, CreateAccount};
use crate::models::note::{CreateNote, Note};
use crate::models::session::CreateSession;
use crate::models::slot::Slot;
use crate::models::user::{NewUser, UserRecord};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Point lookup by principal id.
    async fn find_user(&self, id: &str) -> StoreResult<Option<UserRecord>>;

    /// Insert the row if no row with this id exists, otherwise leave the
    /// existing row untouched. Returns the row as stored.
    async fn insert_user_if_absent(&self, input: &NewUser) -> StoreResult<UserRecord>;

    /// All users with the given role name, ordered by username.
    async fn list_users_by_role(&self, role: &str) -> StoreResult<Vec<UserRecord>>;
}

#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Every slot, ascending by `slot_time` then id.
    async fn list_slots(&self) -> StoreResult<Vec<Slot>>;

    async fn insert_slot(&self, slot_time: Timestamp) -> StoreResult<Slot>;

    /// Overwrite `slot_time`, leaving `booked_by` as is. `None` if missing.
    async fn update_slot_time(&self, id: DbId, slot_time: Timestamp)
        -> StoreResult<Option<Slot>>;

    /// Delete by id. Returns whether a row was removed.
    async fn delete_slot(&self, id: DbId) -> StoreResult<bool>;

    /// Set `booked_by = holder` only if it is currently null.
    ///
    /// Returns `false` when zero rows matched (already booked or missing).
    async fn book_if_available(&self, id: DbId, holder: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note>;

    /// Notes addressed to `recipient_id`, newest first.
    async fn list_notes_for_recipient(&self, recipient_id: &str) -> StoreResult<Vec<Note>>;

    /// Notes written by `sender_id`, newest first.
    async fn list_notes_by_sender(&self, sender_id: &str) -> StoreResult<Vec<Note>>;
}

/// Everything the page handlers need from the record store.
#[async_trait]
pub trait RecordStore: UserStore + SlotStore + NoteStore {
    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}

/// Credential and session persistence for the password identity provider.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fails with [`crate::error::StoreError::Duplicate`] if the email is taken.
    async fn create_account(&self, input: &CreateAccount) -> StoreResult<Account>;

    async fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>>;

    async fn create_session(&self, input: &CreateSession) -> StoreResult<()>;

    /// `true` if the session exists, is not revoked and has not expired.
    async fn is_session_active(&self, jti: &str) -> StoreResult<bool>;

    /// Returns `true` if an active session was revoked.
    async fn revoke_session(&self, jti: &str) -> StoreResult<bool>;
}
