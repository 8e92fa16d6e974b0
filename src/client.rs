//! Client assembly
//!
//! Wires configuration, storage, the HTTP transport and the session manager
//! together.

use log::info;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::SessionManager;
use crate::storage::{FileStore, KeyValueStore};
use crate::transport::{CredentialSlot, HttpTransport};

/// Open the configured state file and restore the session from it
pub fn build_session(config: &ClientConfig) -> Result<SessionManager<FileStore>, ClientError> {
    let store = FileStore::open(config.storage.state_file_path())?;
    info!("Using state file {}", store.path().display());
    with_store(config, store)
}

/// Build a session over an arbitrary store, talking to the configured API
pub fn with_store<S: KeyValueStore>(
    config: &ClientConfig,
    store: S,
) -> Result<SessionManager<S>, ClientError> {
    let (slot, reader) = CredentialSlot::new();
    let transport = HttpTransport::new(&config.api, Arc::new(reader))?;
    info!("API base URL: {}", config.api.base_url);
    Ok(SessionManager::init_auth(Arc::new(transport), store, slot))
}
