//! Storage trait definitions.

use crate::error::Result;

/// Durable string key-value storage.
///
/// Shaped after browser local storage: flat string keys, string values,
/// and enumeration of every stored key.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn remove(&self, key: &str) -> Result<()>;

    /// List every stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn keys(&self) -> Result<Vec<String>>;
}
