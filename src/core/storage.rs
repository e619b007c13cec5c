//! Key-value persistence for history and preferences
//!
//! Values are JSON strings under fixed keys, so the web build's
//! `localStorage` entries and this store share one layout.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::{info, warn};

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::StorageSettings;

/// Redb table definition for the converter store
/// Key: storage key, Value: JSON document
const STORE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("converter_store");

const DB_FILE: &str = "converter_store.redb";

/// Injected persistence interface. Conversion logic never touches it.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

fn storage_err(context: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("{}: {}", context, e))
}

/// Redb-based store
pub struct RedbStore {
    db: Arc<Mutex<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path).map_err(|e| storage_err("Failed to create database", e))?;

        // Initialize table so read transactions never see it missing
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| storage_err("Failed to begin write transaction", e))?;
            {
                let _table = write_txn
                    .open_table(STORE_TABLE)
                    .map_err(|e| storage_err("Failed to open table", e))?;
            }
            write_txn
                .commit()
                .map_err(|e| storage_err("Failed to commit transaction", e))?;
        }

        info!("[RedbStore] Opened {}", path.display());
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Open the store in the platform data directory.
    pub fn open_default() -> AppResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "converter", "unit-converter")
            .ok_or_else(|| AppError::Config("Failed to get project directories".to_string()))?;
        Self::open(&proj_dirs.data_dir().join(DB_FILE))
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let db = self
            .db
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        let read_txn = db
            .begin_read()
            .map_err(|e| storage_err("Failed to begin read", e))?;
        let table = read_txn
            .open_table(STORE_TABLE)
            .map_err(|e| storage_err("Failed to open table", e))?;

        let value = table
            .get(key)
            .map_err(|e| storage_err("Failed to read entry", e))?
            .map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let db = self
            .db
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        let write_txn = db
            .begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn
                .open_table(STORE_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table
                .insert(key, value)
                .map_err(|e| storage_err("Failed to insert", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| storage_err("Failed to commit", e))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let db = self
            .db
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        let write_txn = db
            .begin_write()
            .map_err(|e| storage_err("Failed to begin write", e))?;
        {
            let mut table = write_txn
                .open_table(STORE_TABLE)
                .map_err(|e| storage_err("Failed to open table", e))?;
            table
                .remove(key)
                .map_err(|e| storage_err("Failed to remove key", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| storage_err("Failed to commit", e))
    }
}

/// In-memory store, used in tests and when the database cannot be opened
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| storage_err("Mutex poisoned", e))?;
        entries.remove(key);
        Ok(())
    }
}

/// Open the redb store from settings, falling back to memory if that fails.
pub fn open_store(settings: &StorageSettings) -> Arc<dyn KeyValueStore> {
    let opened = match &settings.data_dir {
        Some(dir) => RedbStore::open(&dir.join(DB_FILE)),
        None => RedbStore::open_default(),
    };
    match opened {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(
                "[Storage] Failed to initialize database: {}, using in-memory fallback",
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_db_path() -> PathBuf {
        std::env::temp_dir()
            .join("unit-converter-tests")
            .join(format!("{}.redb", Uuid::new_v4()))
    }

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("converterPreferences", r#"{"decimalPlaces":3}"#).unwrap();
        assert_eq!(
            store.get("converterPreferences").unwrap().as_deref(),
            Some(r#"{"decimalPlaces":3}"#)
        );

        store.set("converterPreferences", "{}").unwrap();
        assert_eq!(store.get("converterPreferences").unwrap().as_deref(), Some("{}"));

        store.remove("converterPreferences").unwrap();
        assert_eq!(store.get("converterPreferences").unwrap(), None);

        // removing a missing key is not an error
        store.remove("converterPreferences").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_redb_store() {
        let path = temp_db_path();
        let store = RedbStore::open(&path).unwrap();
        exercise(&store);
        drop(store);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_redb_store_persists_across_reopen() {
        let path = temp_db_path();
        {
            let store = RedbStore::open(&path).unwrap();
            store.set("conversionHistory", "[]").unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("conversionHistory").unwrap().as_deref(), Some("[]"));
        drop(store);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_store_uses_configured_dir() {
        let dir = std::env::temp_dir()
            .join("unit-converter-tests")
            .join(Uuid::new_v4().to_string());
        let settings = StorageSettings {
            data_dir: Some(dir.clone()),
        };
        let store = open_store(&settings);
        store.set("k", "v").unwrap();
        assert!(dir.join(DB_FILE).exists());
        drop(store);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
