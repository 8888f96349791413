use crate::storage::{SessionStorage, StorageError, StorageResult, check_key};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single entry. The key is checked like any `set`.
    pub fn with_entry(key: &str, value: &str) -> StorageResult<Self> {
        let storage = Self::new();
        storage.set(key, value)?;
        Ok(storage)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().map(|e| e.contains_key(key)).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::unavailable("memory storage lock poisoned"))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        check_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        check_key(key)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        check_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }
}
