//! In-process key-value store, used by tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Backend(format!("Lock poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("theme", b"dark").unwrap();
        assert_eq!(store.get_string("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
