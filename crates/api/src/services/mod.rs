//! Components that sit between the handlers and the record store.
//!
//! Each service holds an `Arc<dyn RecordStore>` and is built per request from
//! [`AppState`](crate::state::AppState). Store failures are logged where they
//! happen and surface as [`CoreError::Store`].

pub mod notes;
pub mod roles;
pub mod slots;

use slotbook_core::error::CoreError;
use slotbook_db::error::StoreError;

/// Log a failed store call and convert it for propagation with `?`.
pub(crate) fn store_failure(operation: &'static str) -> impl FnOnce(StoreError) -> CoreError {
    move |err| {
        tracing::error!(operation, error = %err, "Record store call failed");
        err.into()
    }
}
