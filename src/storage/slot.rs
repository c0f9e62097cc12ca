//! Key-value slot storage
//!
//! A minimal local-storage style interface: each named slot holds one string.
//! Reads never fail; an unreadable slot is reported as absent.

use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::StoreError;

const SLOT_EXTENSION: &str = "json";

/// Durable storage addressed by slot name.
pub trait KeyValueStorage {
    /// Returns the slot contents, or `None` when the slot is absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Replaces the slot contents as a whole.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Checks that a slot name is usable as a file stem.
pub fn is_valid_slot_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

/// In-process storage, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each slot as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, SLOT_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}.tmp", key, SLOT_EXTENSION))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        if !is_valid_slot_name(key) {
            warn!("Refusing to read invalid slot name {:?}", key);
            return None;
        }

        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot {} not found at {}", key, path.display());
                None
            }
            Err(e) => {
                warn!("Failed to read slot {} ({}): {}", key, path.display(), e);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !is_valid_slot_name(key) {
            return Err(StoreError::InvalidSlot(key.to_string()));
        }

        fs::create_dir_all(&self.dir)?;

        // Write beside the target, then rename over it so readers only ever
        // see the old or the new contents.
        let temp_path = self.temp_path(key);
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, self.slot_path(key)) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::from(e));
        }

        debug!("Wrote {} bytes to slot {}", value.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names() {
        assert!(is_valid_slot_name("users"));
        assert!(is_valid_slot_name("users-v2_test"));
        assert!(!is_valid_slot_name(""));
        assert!(!is_valid_slot_name("../users"));
        assert!(!is_valid_slot_name("a/b"));
    }

    #[test]
    fn test_memory_storage_replaces_value() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("users"), None);
        storage.set_item("users", "[]").unwrap();
        storage.set_item("users", "[1]").unwrap();
        assert_eq!(storage.get_item("users").as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_storage_round_trip_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));
        assert_eq!(storage.get_item("users"), None);

        storage.set_item("users", "[]").unwrap();
        assert_eq!(storage.get_item("users").as_deref(), Some("[]"));
        assert!(storage.slot_path("users").is_file());
        assert!(!storage.temp_path("users").exists());
    }

    #[test]
    fn test_file_storage_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path());
        assert!(matches!(
            storage.set_item("../escape", "[]"),
            Err(StoreError::InvalidSlot(_))
        ));
        assert_eq!(storage.get_item("../escape"), None);
    }
}
