use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::error::{Error, Result};

/// Well-known storage keys. Nothing else is persisted.
pub mod keys {
    pub const SESSION_ID: &str = "session_id";
    pub const LANDING_PAGE: &str = "landing_page";
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
}

/// Durable string key-value storage.
///
/// The whole contract is "set if absent" or "overwrite wholesale": no
/// partial updates, so concurrent call sites stay safe without coordination
/// beyond the implementation's own interior locking.
pub trait KeyStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: a flat JSON map, read and rewritten whole.
///
/// Mirrors browser local storage semantics: one shared namespace that
/// persists until explicitly cleared.
pub struct FileStore {
    path: PathBuf,
    state: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create on first write) the store file inside `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("store.json");
        let state = Self::read_map(&path)?;
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn read_map(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("corrupt store file {}: {}", path.display(), e)))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(map)
            .map_err(|e| Error::Storage(format!("serialize store state: {}", e)))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.insert(key.to_string(), value.to_string());
        self.write_map(&state)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.remove(key).is_some() {
            self.write_map(&state)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all keys, simulating a cleared browser storage.
    pub fn clear(&self) {
        self.state.lock().unwrap().clear();
    }
}

impl KeyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.state.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Read `key`, or store the value produced by `make` and return it.
///
/// Write failures are tolerated: identity state is best-effort, so the
/// freshly produced value is still returned and the failure only logged.
pub fn get_or_insert_with<F>(store: &dyn KeyStore, key: &str, make: F) -> String
where
    F: FnOnce() -> String,
{
    if let Some(existing) = store.get(key) {
        return existing;
    }

    let value = make();
    if let Err(e) = store.set(key, &value) {
        warn!(key, error = %e, "failed to persist store key, continuing with in-process value");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::open(temp_dir.path())?;

        assert!(store.get(keys::SESSION_ID).is_none());
        store.set(keys::SESSION_ID, "abc-123")?;
        assert_eq!(store.get(keys::SESSION_ID).as_deref(), Some("abc-123"));

        // A fresh handle over the same directory sees persisted state.
        let reopened = FileStore::open(temp_dir.path())?;
        assert_eq!(reopened.get(keys::SESSION_ID).as_deref(), Some("abc-123"));

        Ok(())
    }

    #[test]
    fn test_file_store_remove() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::open(temp_dir.path())?;

        store.set(keys::TOKEN, "t")?;
        store.set(keys::USER, "u")?;
        store.remove(keys::TOKEN)?;

        assert!(store.get(keys::TOKEN).is_none());
        assert_eq!(store.get(keys::USER).as_deref(), Some("u"));

        let reopened = FileStore::open(temp_dir.path())?;
        assert!(reopened.get(keys::TOKEN).is_none());

        Ok(())
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("store.json"), "not json")?;

        assert!(FileStore::open(temp_dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_get_or_insert_with_is_first_write_wins() {
        let store = MemoryStore::new();

        let first = get_or_insert_with(&store, keys::LANDING_PAGE, || "/a".to_string());
        let second = get_or_insert_with(&store, keys::LANDING_PAGE, || "/b".to_string());

        assert_eq!(first, "/a");
        assert_eq!(second, "/a");
    }

    #[test]
    fn test_clear_resets_memory_store() {
        let store = MemoryStore::new();
        store.set(keys::SESSION_ID, "s1").unwrap();
        store.clear();
        assert!(store.get(keys::SESSION_ID).is_none());
    }
}
