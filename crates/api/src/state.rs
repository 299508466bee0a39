use std::sync::Arc;

use slotbook_core::identity::IdentityProvider;
use slotbook_db::store::RecordStore;

use crate::config::ServerConfig;
use crate::services::notes::NoteBroadcaster;
use crate::services::roles::RoleResolver;
use crate::services::slots::SlotManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; both external capabilities sit behind `Arc<dyn _>` so
/// tests can inject fakes.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Record store capability (`users`, `slots`, `notes`).
    pub store: Arc<dyn RecordStore>,
    /// Identity capability (sessions and credentials).
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn roles(&self) -> RoleResolver {
        RoleResolver::new(Arc::clone(&self.store))
    }

    pub fn slots(&self) -> SlotManager {
        SlotManager::new(Arc::clone(&self.store), self.config.default_utc_offset_minutes)
    }

    pub fn notes(&self) -> NoteBroadcaster {
        NoteBroadcaster::new(Arc::clone(&self.store))
    }
}
