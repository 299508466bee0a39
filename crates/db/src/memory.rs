//! In-process record and account stores.
//!
//! Used by the API integration tests and by `STORE_BACKEND=memory` for local
//! runs without Postgres. Each table sits behind its own `RwLock`, and the
//! conditional booking update runs entirely under the write lock, which gives
//! the same single-winner guarantee as the row-level `UPDATE ... WHERE
//! booked_by IS NULL` in Postgres.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use slotbook_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::account::{Account, CreateAccount};
use crate::models::note::{CreateNote, Note};
use crate::models::session::{CreateSession, SessionRecord};
use crate::models::slot::Slot;
use crate::models::user::{NewUser, UserRecord};
use crate::store::{AccountStore, NoteStore, RecordStore, SlotStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    slots: RwLock<BTreeMap<DbId, Slot>>,
    notes: RwLock<Vec<Note>>,
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, SessionRecord>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `users`/`slots`/`notes` call fail with a backend error.
    ///
    /// Accounts and sessions keep answering, so a caller can still hold a
    /// valid session while its role lookup fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("record store unavailable".into()));
        }
        Ok(())
    }

    fn allocate_id(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn newest_first(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    notes
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        self.check_available()?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn insert_user_if_absent(&self, input: &NewUser) -> StoreResult<UserRecord> {
        self.check_available()?;
        let mut users = self.users.write().await;
        let row = users.entry(input.id.clone()).or_insert_with(|| UserRecord {
            id: input.id.clone(),
            role: input.role.as_str().to_string(),
            username: input.username.clone(),
            created_at: Utc::now(),
        });
        Ok(row.clone())
    }

    async fn list_users_by_role(&self, role: &str) -> StoreResult<Vec<UserRecord>> {
        self.check_available()?;
        let mut rows: Vec<UserRecord> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.username.cmp(&b.username).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }
}

#[async_trait]
impl SlotStore for MemoryStore {
    async fn list_slots(&self) -> StoreResult<Vec<Slot>> {
        self.check_available()?;
        let mut rows: Vec<Slot> = self.slots.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.slot_time.cmp(&b.slot_time).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn insert_slot(&self, slot_time: Timestamp) -> StoreResult<Slot> {
        self.check_available()?;
        let now = Utc::now();
        let slot = Slot {
            id: self.allocate_id(),
            slot_time,
            booked_by: None,
            created_at: now,
            updated_at: now,
        };
        self.slots.write().await.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn update_slot_time(
        &self,
        id: DbId,
        slot_time: Timestamp,
    ) -> StoreResult<Option<Slot>> {
        self.check_available()?;
        let mut slots = self.slots.write().await;
        Ok(slots.get_mut(&id).map(|slot| {
            slot.slot_time = slot_time;
            slot.updated_at = Utc::now();
            slot.clone()
        }))
    }

    async fn delete_slot(&self, id: DbId) -> StoreResult<bool> {
        self.check_available()?;
        Ok(self.slots.write().await.remove(&id).is_some())
    }

    async fn book_if_available(&self, id: DbId, holder: &str) -> StoreResult<bool> {
        self.check_available()?;
        let mut slots = self.slots.write().await;
        match slots.get_mut(&id) {
            Some(slot) if slot.booked_by.is_none() => {
                slot.booked_by = Some(holder.to_string());
                slot.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert_note(&self, input: &CreateNote) -> StoreResult<Note> {
        self.check_available()?;
        let note = Note {
            id: self.allocate_id(),
            title: input.title.clone(),
            body: input.body.clone(),
            sender_id: input.sender_id.clone(),
            recipient_id: input.recipient_id.clone(),
            created_at: Utc::now(),
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn list_notes_for_recipient(&self, recipient_id: &str) -> StoreResult<Vec<Note>> {
        self.check_available()?;
        let notes = self.notes.read().await;
        Ok(newest_first(
            notes
                .iter()
                .filter(|n| n.recipient_id == recipient_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_notes_by_sender(&self, sender_id: &str) -> StoreResult<Vec<Note>> {
        self.check_available()?;
        let notes = self.notes.read().await;
        Ok(newest_first(
            notes
                .iter()
                .filter(|n| n.sender_id == sender_id)
                .cloned()
                .collect(),
        ))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, input: &CreateAccount) -> StoreResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&input.email) {
            return Err(StoreError::Duplicate("uq_accounts_email".into()));
        }
        let account = Account {
            id: input.id.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create_session(&self, input: &CreateSession) -> StoreResult<()> {
        let record = SessionRecord {
            jti: input.jti.clone(),
            account_id: input.account_id.clone(),
            expires_at: input.expires_at,
            revoked_at: None,
            created_at: Utc::now(),
        };
        self.sessions.write().await.insert(record.jti.clone(), record);
        Ok(())
    }

    async fn is_session_active(&self, jti: &str) -> StoreResult<bool> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(jti)
            .is_some_and(|s| s.revoked_at.is_none() && s.expires_at > now))
    }

    async fn revoke_session(&self, jti: &str) -> StoreResult<bool> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(jti) {
            Some(session) if session.revoked_at.is_none() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
