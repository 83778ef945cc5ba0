//! Key-value preferences medium
//!
//! The recent emoji list is persisted as a single string value under a
//! well-known key. `Database` is the on-device implementation; `MemoryPreferences`
//! backs tests and previews.

use crate::database::{Database, DatabaseError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Storage error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Preferences unavailable: {0}")]
    Unavailable(String),
}

pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// A string-keyed, string-valued persistence medium.
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, key: &str) -> PreferencesResult<Option<String>>;
    fn set_string(&self, key: &str, value: &str) -> PreferencesResult<()>;
    fn remove(&self, key: &str) -> PreferencesResult<()>;
}

impl PreferenceStore for Database {
    fn get_string(&self, key: &str) -> PreferencesResult<Option<String>> {
        Ok(self.get_preference(key)?)
    }

    fn set_string(&self, key: &str, value: &str) -> PreferencesResult<()> {
        Ok(self.set_preference(key, value)?)
    }

    fn remove(&self, key: &str) -> PreferencesResult<()> {
        Ok(self.remove_preference(key)?)
    }
}

/// In-memory preferences.
///
/// Writes can be switched off with [`MemoryPreferences::set_writable`] to
/// simulate a full or read-only disk.
#[derive(Debug)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
    writable: AtomicBool,
}

impl Default for MemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            writable: AtomicBool::new(true),
        }
    }

    pub fn set_writable(&self, writable: bool) {
        self.writable.store(writable, Ordering::SeqCst);
    }

    fn check_writable(&self) -> PreferencesResult<()> {
        if self.writable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(PreferencesError::Unavailable("writes disabled".to_string()))
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> PreferencesResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> PreferencesResult<()> {
        self.check_writable()?;
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferencesResult<()> {
        self.check_writable()?;
        self.values.lock().remove(key);
        Ok(())
    }
}
