use crate::storage::{SessionStorage, StorageError, StorageResult, check_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

const RECORD_EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::dir_creation(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn record_path(&self, key: &str) -> StorageResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.{RECORD_EXTENSION}")))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.record_path(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::file_read(path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::invalid_encoding(path, e))
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.record_path(key)?;
        let temp_path = self.dir.join(format!(
            "{key}.{RECORD_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote record {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.record_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed record {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}
