//! Backend for environments without persistent storage.

use crate::error::{Error, Result};
use crate::storage::traits::KeyValueStore;

/// Storage backend where every operation fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl KeyValueStore for UnavailableBackend {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Err(Error::StorageUnavailable)
    }
}
