//! Key-value persistence seam.
//!
//! The engine never touches ambient storage. Everything persisted goes
//! through a `KeyValueStore` the caller provides: a browser-style local
//! storage, a file, or the in-memory `MemoryStore`.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::error::StoreError;

/// String key to string value storage.
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Decode the JSON value under `key`.
///
/// Missing keys yield `None`; undecodable values are logged and yield `None`.
pub fn load_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "discarding undecodable stored value");
            None
        }
    }
}

/// Encode `value` as JSON under `key`.
pub fn save_json<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}
