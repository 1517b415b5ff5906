//! File-backed key-value store
//!
//! Each key is persisted as `<dir>/<key>.json`. Writes go to a temporary
//! sibling first and are renamed over the target, so a failed write never
//! leaves a half-written value behind.

use super::KeyValueStore;
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the data directory
const APP_NAME: &str = "statcode";

/// Extension of stored value files
const VALUE_EXTENSION: &str = "json";

/// Extension of temporary files used during atomic writes
const TEMP_EXTENSION: &str = "json.tmp";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific data directory for the application.
///
/// - **Windows**: `%APPDATA%\statcode\`
/// - **macOS**: `~/Library/Application Support/statcode/`
/// - **Linux**: `~/.local/share/statcode/`
///
/// Falls back to the config directory when no data directory is known.
///
/// # Errors
///
/// Returns `Error::DataDirNotFound` if neither directory can be determined.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::config_dir)
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::DataDirNotFound)
}

// ─────────────────────────────────────────────────────────────────────────────
// File Store
// ─────────────────────────────────────────────────────────────────────────────

/// Key-value store persisting one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = get_data_dir()?;
        info!("Using data directory {}", dir.display());
        Ok(Self::new(dir))
    }

    /// The directory holding the value files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, VALUE_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, TEMP_EXTENSION))
    }

    fn ensure_dir(&self, key: &str) -> Result<()> {
        if !self.dir.exists() {
            debug!("Creating data directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir).map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            debug!("No stored value for '{}' at {}", key, path.display());
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Error::StorageRead {
                key: key.to_string(),
                source: Box::new(e),
            })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir(key)?;
        let path = self.value_path(key);
        let temp = self.temp_path(key);

        fs::write(&temp, value).map_err(|e| Error::StorageWrite {
            key: key.to_string(),
            source: Box::new(e),
        })?;

        fs::rename(&temp, &path).map_err(|e| Error::StorageWrite {
            key: key.to_string(),
            source: Box::new(e),
        })?;

        debug!("Stored '{}' ({} bytes) at {}", key, value.len(), path.display());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_data_dir_contains_app_name() {
        if let Ok(path) = get_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp.path());
        assert_eq!(store.read("projects").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dir = temp.path().join("nested").join(APP_NAME);
        let mut store = FileStore::new(&dir);

        store.write("settings", r#"{"theme":"dark"}"#).unwrap();

        let on_disk = fs::read_to_string(dir.join("settings.json")).unwrap();
        assert_eq!(on_disk, r#"{"theme":"dark"}"#);
        assert!(!dir.join("settings.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut store = FileStore::new(temp.path());

        store.write("projects", "[1]").unwrap();
        store.write("projects", "[2]").unwrap();

        assert_eq!(store.read("projects").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut store = FileStore::new(temp.path());

        store.write("settings", "{}").unwrap();
        store.write("projects", "[]").unwrap();

        assert_eq!(store.read("settings").unwrap().as_deref(), Some("{}"));
        assert_eq!(store.read("projects").unwrap().as_deref(), Some("[]"));
    }
}
