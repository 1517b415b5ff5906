//! Settings persistence for StatCode
//!
//! Loads and saves `Settings` through a `KeyValueStore` under the `settings`
//! key, with graceful fallback to defaults when the stored value is missing,
//! empty or corrupted.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use crate::storage::{KeyValueStore, SETTINGS_KEY};
use log::{debug, info, warn};

// ─────────────────────────────────────────────────────────────────────────────
// Load Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from the store.
///
/// # Behavior
///
/// 1. If a valid JSON object is stored, load and sanitize it
/// 2. If nothing is stored (or the value is blank), return defaults
/// 3. If the stored value is corrupted, log a warning and return defaults
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
    load_settings_internal(store)
        .unwrap_or_warn_default(Settings::default(), "Failed to load settings")
}

fn load_settings_internal<S: KeyValueStore + ?Sized>(store: &S) -> Result<Settings> {
    let Some(contents) = store.read(SETTINGS_KEY)? else {
        debug!("No stored settings, using defaults");
        return Ok(Settings::default());
    };

    if contents.trim().is_empty() {
        debug!("Stored settings are empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!("Stored settings contain invalid JSON: {}", e);
        Error::Parse {
            message: format!("Failed to parse settings: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Settings loaded: {:?}", settings);
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to the store.
///
/// # Errors
///
/// - `Error::StorageWrite`: the store rejected the write
pub fn save_settings<S: KeyValueStore + ?Sized>(store: &mut S, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string(settings).map_err(|e| Error::StorageWrite {
        key: SETTINGS_KEY.to_string(),
        source: Box::new(e),
    })?;
    store.write(SETTINGS_KEY, &json)?;
    debug!("Settings saved");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_settings_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_load_blank_settings_uses_defaults() {
        let mut store = MemoryStore::new();
        store.write(SETTINGS_KEY, "   \n").unwrap();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_load_corrupted_settings_uses_defaults() {
        let mut store = MemoryStore::new();
        store.write(SETTINGS_KEY, "{ not json").unwrap();
        assert_eq!(load_settings(&store), Settings::default());

        store.write(SETTINGS_KEY, "null").unwrap();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_load_sanitizes_values() {
        let mut store = MemoryStore::new();
        store
            .write(SETTINGS_KEY, r#"{"theme":"hacker","fontSize":2,"autosaveInterval":0}"#)
            .unwrap();
        let settings = load_settings(&store);
        assert_eq!(settings.theme, Theme::Hacker);
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.autosave_interval, 5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut store = FileStore::new(temp.path());
        let original = Settings {
            theme: Theme::Futuristic,
            font_size: 18,
            autosave_interval: 30,
        };

        save_settings(&mut store, &original).unwrap();
        assert_eq!(load_settings(&store), original);
    }
}
