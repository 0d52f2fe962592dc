//! CLI command implementations.

pub mod clear;
pub mod lessons;
pub mod run;
pub mod runtimes;
pub mod start;
pub mod status;
pub mod template;

use crate::config::Config;
use crate::session::SessionStore;
use crate::storage::{FileBackend, UnavailableBackend};
use std::sync::Arc;

/// Open the session store configured in `config`.
///
/// Falls back to a store without persistence if the storage directory
/// cannot be created.
#[must_use]
pub fn open_store(config: &Config) -> SessionStore {
    match FileBackend::new(config.storage.path.clone()) {
        Ok(backend) => SessionStore::new(Arc::new(backend)),
        Err(e) => {
            tracing::warn!(
                path = %config.storage.path.display(),
                error = %e,
                "storage unavailable, progress will not be saved"
            );
            SessionStore::new(Arc::new(UnavailableBackend))
        }
    }
}
