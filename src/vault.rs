//! Device key-value storage for session and preference data
//!
//! The mobile builds of Stockroom keep their session in the platform
//! key-value store. This module is the crate's equivalent: a small
//! string-keyed store behind the [`SessionVault`] trait, with a JSON file
//! implementation for real use and an in-memory one for tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Error;

/// Key under which the bearer token is persisted
pub const KEY_AUTH_TOKEN: &str = "authToken";

/// Key under which the signed-in user record is persisted (JSON)
pub const KEY_USER_DATA: &str = "userData";

/// Key under which the server-assigned user type is persisted
pub const KEY_USER_TYPE: &str = "userType";

/// Key under which the dark-mode preference is persisted
pub const KEY_DARK_MODE: &str = "isDarkMode";

/// String key-value storage on the device
///
/// Implementations must tolerate concurrent access from multiple client
/// handles; all methods take `&self`.
pub trait SessionVault: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// File-backed vault storing all keys as a single JSON object
///
/// Values are written through on every `set`/`remove`, so a process exit
/// never loses a committed session.
pub struct FileVault {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileVault {
    /// Open a vault at the given path, loading any existing contents
    ///
    /// A missing or unreadable file starts the vault empty; it is never an
    /// error.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), Error> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw).map_err(Error::vault)
    }
}

impl SessionVault for FileVault {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.lock().unwrap();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

/// In-memory vault for tests and sessions that should not outlive the
/// process
#[derive(Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionVault for MemoryVault {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
