//! The storage port.
//!
//! Everything the application persists goes through [`KeyValueStore`]: a flat
//! dictionary of byte strings. The directory, session and preferences layers
//! only ever see this trait, so any backend (SQLite file, in-memory map, a
//! browser's local storage) can be injected.

use crate::error::{Result, StoreError};

pub trait KeyValueStore: Send {
    /// Fetch the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Insert or overwrite `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Fetch a value as UTF-8 text.
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.get(key)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StoreError::InvalidUtf8(key.to_string())),
            None => Ok(None),
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value.as_bytes())
    }
}
