//! Durable key-value stores backing write-through persistence

use std::collections::HashMap;

use crate::error::{EditorError, Result};

/// String key-value store (the browser's `localStorage` shape)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    /// Drop every entry in the store
    fn clear(&mut self) -> Result<()>;
}

/// In-process store, used natively and in tests
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// The browser's `window.localStorage`
///
/// Holds no handle; the storage object is looked up on every call so the
/// type stays `Send` and can live inside the API's document mutex.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| EditorError::Storage("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| EditorError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| EditorError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| EditorError::Storage(format!("getItem('{}') failed: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| EditorError::Storage(format!("setItem('{}') failed: {:?}", key, e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| EditorError::Storage(format!("removeItem('{}') failed: {:?}", key, e)))
    }

    fn clear(&mut self) -> Result<()> {
        Self::storage()?
            .clear()
            .map_err(|e| EditorError::Storage(format!("clear() failed: {:?}", e)))
    }
}
