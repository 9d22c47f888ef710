//! Key-value persistence capability and the two shipped storage scopes.
//!
//! [`SessionStore`] lives for the process; [`FileStore`] survives restarts
//! as a JSON file. Which one a router gets is a configuration-time decision
//! of the host. Load is tolerant (missing or corrupt files come back
//! empty), and write failures degrade to a warning — the router assumes
//! storage is always available and has no retry path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage key under which the active section is persisted.
pub const SAVED_SECTION_KEY: &str = "savedSection";

/// String key-value persistence consumed by the router.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store scoped to the current process.
#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store that survives restarts.
///
/// Values are held in memory and written through on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`. A missing or corrupt file loads as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %self.path.display(), %err, "state dir not writable");
                return;
            }
        }
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "state serialization failed");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), %err, "state write failed");
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
