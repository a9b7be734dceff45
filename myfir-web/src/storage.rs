//! Browser persistence: the localStorage-backed progress store and the
//! backup export/import surface used by parents.
use crate::dom::{js_error_message, local_storage};
use myfir_core::{PlayerProgress, ProgressStore, ProgressTracker};
use thiserror::Error;

/// Fixed key of the single persisted progress record. External backup
/// tooling reads this key directly; never rename it.
pub const PROGRESS_KEY: &str = "myfir-player-progress";

/// Prefix shared by all keys this app owns.
pub const KEY_PREFIX: &str = "myfir-";

/// Keys a backup import is allowed to write.
const IMPORTABLE_KEYS: [&str; 1] = [PROGRESS_KEY];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to remove {key}: {message}")]
    Remove { key: String, message: String },
    #[error("backup payload is not a JSON object of string values")]
    MalformedBackup,
}

/// Progress store over browser `localStorage`.
///
/// Outside a browser context loads report no record and writes are no-ops,
/// so server rendering sees the default level-1 record and never touches
/// storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProgressStore;

impl LocalProgressStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressStore for LocalProgressStore {
    type Error = StorageError;

    fn load(&self) -> Result<Option<PlayerProgress>, Self::Error> {
        let Some(storage) = local_storage() else {
            return Ok(None);
        };
        let raw = storage
            .get_item(PROGRESS_KEY)
            .map_err(|e| StorageError::Read {
                key: PROGRESS_KEY.to_string(),
                message: js_error_message(&e),
            })?;
        match raw {
            None => Ok(None),
            Some(text) => match serde_json::from_str(&text) {
                Ok(record) => Ok(Some(record)),
                Err(e) => {
                    // Corrupt records are treated as absent, not repaired.
                    log::warn!("invalid stored progress, starting over: {e}");
                    Ok(None)
                }
            },
        }
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), Self::Error> {
        let Some(storage) = local_storage() else {
            return Ok(());
        };
        let text = serde_json::to_string(progress).map_err(|e| StorageError::Write {
            key: PROGRESS_KEY.to_string(),
            message: e.to_string(),
        })?;
        storage
            .set_item(PROGRESS_KEY, &text)
            .map_err(|e| StorageError::Write {
                key: PROGRESS_KEY.to_string(),
                message: js_error_message(&e),
            })
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let Some(storage) = local_storage() else {
            return Ok(());
        };
        storage
            .remove_item(PROGRESS_KEY)
            .map_err(|e| StorageError::Remove {
                key: PROGRESS_KEY.to_string(),
                message: js_error_message(&e),
            })
    }
}

/// Tracker over the browser store with the shipped tables.
#[must_use]
pub fn progress_tracker() -> ProgressTracker<LocalProgressStore> {
    ProgressTracker::new(LocalProgressStore::new())
}

/// Export every `myfir-` key as a pretty-printed JSON object of raw string
/// values, the shape [`import_backup`] accepts.
///
/// # Errors
///
/// Returns an error when a stored key cannot be read.
pub fn export_backup() -> Result<String, StorageError> {
    let mut data = serde_json::Map::new();
    if let Some(storage) = local_storage() {
        let len = storage.length().unwrap_or(0);
        for i in 0..len {
            let Ok(Some(key)) = storage.key(i) else {
                continue;
            };
            if !key.starts_with(KEY_PREFIX) {
                continue;
            }
            let value = storage.get_item(&key).map_err(|e| StorageError::Read {
                key: key.clone(),
                message: js_error_message(&e),
            })?;
            if let Some(value) = value {
                data.insert(key, serde_json::Value::String(value));
            }
        }
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(data)).map_err(|e| {
        StorageError::Write {
            key: String::from("backup"),
            message: e.to_string(),
        }
    })
}

/// Import a backup produced by [`export_backup`], writing only the keys this
/// app owns. Values are stored as-is; the next load validates and self-heals
/// the record.
///
/// Returns the number of keys written.
///
/// # Errors
///
/// Returns an error when the payload is not a JSON object of strings or a
/// key cannot be written.
pub fn import_backup(data: &str) -> Result<usize, StorageError> {
    let parsed: serde_json::Value =
        serde_json::from_str(data).map_err(|_| StorageError::MalformedBackup)?;
    let Some(entries) = parsed.as_object() else {
        return Err(StorageError::MalformedBackup);
    };

    let Some(storage) = local_storage() else {
        return Ok(0);
    };
    let mut written = 0;
    for (key, value) in entries {
        if !IMPORTABLE_KEYS.contains(&key.as_str()) {
            continue;
        }
        let Some(text) = value.as_str() else {
            return Err(StorageError::MalformedBackup);
        };
        storage.set_item(key, text).map_err(|e| StorageError::Write {
            key: key.clone(),
            message: js_error_message(&e),
        })?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Native tests have no window; the store must degrade instead of panic.
    #[test]
    fn non_browser_context_loads_nothing_and_swallows_writes() {
        let store = LocalProgressStore::new();
        assert!(store.load().unwrap().is_none());

        let tracker = progress_tracker();
        let progress = tracker.progress();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.title, "はじめて の たんけんか");

        store.save(&progress).unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn import_rejects_non_object_payloads() {
        assert!(matches!(
            import_backup("[1, 2, 3]"),
            Err(StorageError::MalformedBackup)
        ));
        assert!(matches!(
            import_backup("not json"),
            Err(StorageError::MalformedBackup)
        ));
    }

    #[test]
    fn import_ignores_keys_outside_the_app() {
        // No window in native tests, so nothing is written either way; the
        // call must still succeed for a well-formed payload.
        let payload = r#"{"evil-key": "x", "myfir-unknown": "y"}"#;
        assert_eq!(import_backup(payload).unwrap(), 0);
    }
}
