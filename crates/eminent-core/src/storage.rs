//! Durable key-value preference storage.
//!
//! The browser original kept its two flags in `localStorage`; here the
//! same contract is an injected `KeyValueStore` so the controllers can be
//! tested without a real backend, with a redb-backed implementation for
//! the desktop shell and an in-memory one for tests and for degraded
//! operation when the database cannot be opened.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::SiteError;

/// Storage key for the cookie-consent decision.
pub const CONSENT_KEY: &str = "cookieConsent";

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

const PREFS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("prefs");

/// A key-value string store. Reads may return absent; either operation
/// may fail when the backing store is unavailable.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        (**self).set(key, value)
    }
}

/// Preference storage backed by redb.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the preference database at the given path.
    ///
    /// Creates the parent directory and the prefs table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFS_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store. Used in tests and as the degraded fallback when the
/// durable store cannot be opened; values do not survive a restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.map.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.map.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
