use crate::error::{CanvasError, CanvasResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Durable string key/value store.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> CanvasResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CanvasResult<()>;
    /// Returns whether the key existed.
    fn remove(&self, key: &str) -> CanvasResult<bool>;
}

pub type SharedStorage = Arc<dyn Storage>;

/// One JSON file per key under a data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a reader never
/// observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> CanvasResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> CanvasResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CanvasError::InvalidFormat(format!(
            "storage key '{key}' may only contain letters, digits, '-' and '_'"
        )))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> CanvasResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CanvasError::storage(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> CanvasResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|err| CanvasError::storage(key, err))?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|err| CanvasError::storage(key, err))?;
        fs::rename(&staging, &path).map_err(|err| {
            let _ = fs::remove_file(&staging);
            CanvasError::storage(key, err)
        })?;

        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> CanvasResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CanvasError::storage(key, err)),
        }
    }
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls across all clones.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> CanvasResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CanvasResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> CanvasResult<bool> {
        Ok(self.lock().remove(key).is_some())
    }
}
