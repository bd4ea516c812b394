//! Storage media for persisted values.
//!
//! A backend maps string keys to serialized text. It knows nothing about the
//! shape of the values; [`Persisted`](super::Persisted) owns (de)serialization
//! and the fail-soft policy.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::StorageError;

/// A keyed text store that survives process restarts (or pretends to).
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// One JSON file per key inside a directory.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the target, so a file is always either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_err(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io = |e: std::io::Error| io_err(key, e);
        std::fs::create_dir_all(&self.dir).map_err(io)?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(io)?;
        temp.write_all(value.as_bytes()).map_err(io)?;
        temp.as_file().sync_all().map_err(io)?;
        temp.persist(&path).map_err(|e| io(e.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key, e)),
        }
    }
}

/// In-process storage. Nothing outlives the backend itself.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn file_backend_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write("subjects", "[1,2,3]").unwrap();

        assert_eq!(
            backend.read("subjects").unwrap().as_deref(),
            Some("[1,2,3]")
        );
        assert!(temp_dir.path().join("subjects.json").exists());
    }

    #[test]
    fn file_backend_missing_key_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        assert_eq!(backend.read("dayData").unwrap(), None);
    }

    #[test]
    fn file_backend_creates_directory_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested/path");
        let backend = FileBackend::new(&nested);

        assert!(!nested.exists());
        backend.write("dayData", "{}").unwrap();
        assert!(nested.join("dayData.json").exists());
    }

    #[test]
    fn file_backend_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write("dayData", "{}").unwrap();
        backend.remove("dayData").unwrap();
        backend.remove("dayData").unwrap();

        assert_eq!(backend.read("dayData").unwrap(), None);
    }

    #[test]
    fn file_backend_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            let result = backend.write(key, "x");
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn file_backend_overwrite_leaves_only_target_file() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write("dayData", r#"{"2025-09-10":{}}"#).unwrap();
        backend.write("dayData", "{}").unwrap();

        assert_eq!(backend.read("dayData").unwrap().as_deref(), Some("{}"));
        assert_eq!(file_names(temp_dir.path()), vec!["dayData.json"]);
    }

    #[test]
    fn file_backend_failed_replace_cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());
        backend.write("subjects", "[]").unwrap();
        // A directory squatting on the target path makes the final rename fail.
        std::fs::create_dir(temp_dir.path().join("dayData.json")).unwrap();

        let result = backend.write("dayData", "{}");

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(
            file_names(temp_dir.path()),
            vec!["dayData.json", "subjects.json"]
        );
        assert_eq!(backend.read("subjects").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_backend_roundtrip_and_remove() {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());

        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(backend.len(), 1);

        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}
