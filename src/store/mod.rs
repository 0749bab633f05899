//! Key-value storage for the rider's preferences.
//!
//! The tracker only ever persists one value (the selected station), but the
//! store is a plain string-to-string map so it can be swapped for a test double.

mod schema;
mod sqlite;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use thiserror::Error;

pub use sqlite::SqliteStore;

/// Preference store failures. Callers in this crate treat all of them as
/// non-fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// A flat string key-value store, scoped to one client.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store. Clones share the same map, which lets a test "restart"
/// by building a second selector over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open the SQLite store at `path`, falling back to an in-memory store when
/// the file cannot be opened or is not a preference database. The selection
/// then lasts for this session only.
pub fn open_or_memory(path: &Path) -> Box<dyn PreferenceStore> {
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                "Failed to open preference store at {}, selection will not be saved: {:#}",
                path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}
