//! Postgres-backed record and account stores.

use async_trait::async_trait;
use slotbook_core::types::{DbId, Timestamp};

use crate::error::StoreResult;
use crate::models::account::{Account, CreateAccount};
use crate::models::note::{CreateNote, Note};
use crate::models::session::CreateSession;
use crate::models::slot::Slot;
use crate::models::user::{NewUser, UserRecord};
use crate::repositories::{AccountRepo, NoteRepo, SessionRepo, SlotRepo, UserRepo};
use crate::store::{AccountStore, NoteStore, RecordStore, SlotStore, UserStore};
use crate::DbPool;

/// Adapter that implements the store traits over the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_user_if_absent(&self, input: &NewUser) -> StoreResult<UserRecord> {
        Ok(UserRepo::insert_if_absent(&self.pool, input).await?)
    }

    async fn list_users_by_role(&self, role: &str) -> StoreResult<Vec<UserRecord>> {
        Ok(UserRepo::list_by_role(&self.pool, role).await?)
    }
}

#[async_trait]
impl SlotStore for PgStore {
    async fn list_slots(&self) -> StoreResult<Vec<Slot>> {
        Ok(SlotRepo::list(&self.pool).await?)
    }

    async fn insert_slot(&self, slot_time: Timestamp) -> StoreResult<Slot> {
        Ok(SlotRepo::create(&self.pool, slot_time).await?)
    }

    async fn update_slot_time(
        &self,
        id: DbId,
        slot_time: Timestamp,
    ) -> StoreResult<Option<Slot>> {
        Ok(SlotRepo::update_time(&self.pool, id, slot_time).await?)
    }

    async fn delete_slot(&self, id: DbId) -> StoreResult<bool> {
        Ok(SlotRepo::delete(&self.pool, id).await?)
    }

    async fn book_if_available(&self, id: DbId, holder: &str) -> StoreResult<bool> {
        let booked = SlotRepo::book_if_available(&self.pool, id, holder).await?;
        if !booked {
            tracing::debug!(slot_id = id, "Conditional booking matched no rows");
        }
        Ok(booked)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note> {
        Ok(NoteRepo::create(&self.pool, input).await?)
    }

    async fn list_notes_for_recipient(&self, recipient_id: &str) -> StoreResult<Vec<Note>> {
        Ok(NoteRepo::list_for_recipient(&self.pool, recipient_id).await?)
    }

    async fn list_notes_by_sender(&self, sender_id: &str) -> StoreResult<Vec<Note>> {
        Ok(NoteRepo::list_by_sender(&self.pool, sender_id).await?)
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create_account(&self, input: &CreateAccount) -> StoreResult<Account> {
        Ok(AccountRepo::create(&self.pool, input).await?)
    }

    async fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        Ok(AccountRepo::find_by_email(&self.pool, email).await?)
    }

    async fn create_session(&self, input: &CreateSession) -> StoreResult<()> {
        Ok(SessionRepo::create(&self.pool, input).await?)
    }

    async fn is_session_active(&self, jti: &str) -> StoreResult<bool> {
        Ok(SessionRepo::find_active(&self.pool, jti).await?.is_some())
    }

    async fn revoke_session(&self, jti: &str) -> StoreResult<bool> {
        Ok(SessionRepo::revoke(&self.pool, jti).await?)
    }
}
