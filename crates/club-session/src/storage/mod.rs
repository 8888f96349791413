pub(crate) mod error;
pub(crate) mod file_storage;
pub(crate) mod memory_storage;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Durable key-value store backing the persisted session record.
pub trait SessionStorage {
    /// Read the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys become file names, so only a conservative character set is accepted.
#[track_caller]
pub(crate) fn check_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "key cannot be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StorageError::invalid_key(
            key,
            "only letters, digits, '_' and '-' are allowed",
        ));
    }
    Ok(())
}
