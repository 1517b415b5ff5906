//! Key-value storage for StatCode
//!
//! Settings and projects are persisted as JSON strings under fixed keys.
//! `KeyValueStore` is the seam: `FileStore` keeps one file per key in the
//! platform data directory, `MemoryStore` backs tests.

mod file_store;

pub use file_store::FileStore;

use crate::error::Result;
use std::collections::HashMap;

/// Storage key for the persisted settings object.
pub const SETTINGS_KEY: &str = "settings";

/// Storage key for the persisted project list.
pub const PROJECTS_KEY: &str = "projects";

/// A string-to-string persistent store with atomic per-key writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("settings").unwrap(), None);

        store.write("settings", "{}").unwrap();
        assert_eq!(store.read("settings").unwrap().as_deref(), Some("{}"));

        store.write("settings", "[]").unwrap();
        assert_eq!(store.read("settings").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.write(PROJECTS_KEY, "[]").unwrap();
        assert_eq!(store.read(PROJECTS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
