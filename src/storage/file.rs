//! File-based storage backend.

use crate::error::{Error, Result};
use crate::storage::traits::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Name of the storage document inside the home directory.
const STORAGE_FILE: &str = "storage.json";

/// Where an unparsable storage document is moved before it is replaced.
const CORRUPT_FILE: &str = "storage.json.corrupt";

/// File-based storage backend with atomic writes.
///
/// All keys live in a single JSON object. Each mutation rewrites the
/// whole document; concurrent writers from other processes are
/// last-write-wins.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the storage document.
    fn storage_path(&self) -> PathBuf {
        self.base_dir.join(STORAGE_FILE)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let path = self.storage_path();
        let temp = path.with_extension("tmp");

        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&temp, &contents)?;

        // Atomic rename - prevents corruption if process crashes mid-write
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(Error::Serde(e)) => {
                let aside = self.base_dir.join(CORRUPT_FILE);
                tracing::warn!(
                    path = %aside.display(),
                    error = %e,
                    "storage document is corrupted, moving it aside and starting fresh"
                );
                fs::rename(self.storage_path(), &aside)?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}
