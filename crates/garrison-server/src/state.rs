//! Shared application state.

use crate::{config::ServerConfig, directory::Directory, store::Store};
use garrison_audit::AuditRecorder;
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<ServerConfig>,
    /// Token-to-principal directory.
    pub directory: Directory,
    /// In-memory domain records.
    pub store: Store,
    /// Handle for the audit log.
    pub recorder: AuditRecorder,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(
        config: ServerConfig,
        directory: Directory,
        store: Store,
        recorder: AuditRecorder,
    ) -> Self {
        Self {
            config: Arc::new(config),
            directory,
            store,
            recorder,
        }
    }
}
