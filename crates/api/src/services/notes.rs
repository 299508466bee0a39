//! Admin-to-user notes.

use std::collections::HashSet;
use std::sync::Arc;

use slotbook_core::error::CoreError;
use slotbook_core::notes::validate_new_note;
use slotbook_core::roles::ROLE_USER;
use slotbook_db::models::note::{CreateNote, Note};
use slotbook_db::models::user::UserRecord;
use slotbook_db::store::RecordStore;

use super::store_failure;
use crate::middleware::auth::AuthUser;

pub struct NoteBroadcaster {
    store: Arc<dyn RecordStore>,
}

impl NoteBroadcaster {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Notes visible to `viewer`, newest first.
    ///
    /// Everyone sees notes addressed to them. Admins also see the notes they
    /// sent.
    pub async fn list_notes(&self, viewer: &AuthUser) -> Result<Vec<Note>, CoreError> {
        let mut notes = self
            .store
            .list_notes_for_recipient(&viewer.user_id)
            .await
            .map_err(store_failure("list_notes_for_recipient"))?;

        if viewer.role.is_admin() {
            let sent = self
                .store
                .list_notes_by_sender(&viewer.user_id)
                .await
                .map_err(store_failure("list_notes_by_sender"))?;

            let mut seen: HashSet<_> = notes.iter().map(|n| n.id).collect();
            notes.extend(sent.into_iter().filter(|n| seen.insert(n.id)));
            notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        }

        Ok(notes)
    }

    /// Validate and store a note from `sender` to `recipient_id`.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_note(
        &self,
        sender: &AuthUser,
        title: &str,
        body: &str,
        recipient_id: &str,
    ) -> Result<Note, CoreError> {
        let (title, body, recipient_id) = validate_new_note(title, body, recipient_id)?;

        let note = self
            .store
            .insert_note(&CreateNote {
                title: title.to_string(),
                body: body.to_string(),
                sender_id: sender.user_id.clone(),
                recipient_id: recipient_id.to_string(),
            })
            .await
            .map_err(store_failure("insert_note"))?;

        tracing::info!(
            note_id = note.id,
            sender_id = %note.sender_id,
            recipient_id = %note.recipient_id,
            "Note sent"
        );
        Ok(note)
    }

    /// Users an admin can address a note to.
    pub async fn list_recipients(&self) -> Result<Vec<UserRecord>, CoreError> {
        self.store
            .list_users_by_role(ROLE_USER)
            .await
            .map_err(store_failure("list_users_by_role"))
    }
}
