//! # Durable Token Storage
//!
//! Key-value persistence for the session tokens. Only two keys are ever
//! written: [`ACCESS_TOKEN_KEY`] and [`REFRESH_TOKEN_KEY`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::error::{AppError, Result};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// One pending change: `Some` writes the value, `None` removes the key.
pub type Change<'a> = (&'a str, Option<&'a str>);

/// Durable key-value storage for session tokens.
///
/// [`TokenStorage::apply`] must commit all changes or none, which is what
/// keeps the access and refresh entries paired.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn apply(&self, changes: &[Change<'_>]) -> Result<()>;

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.apply(&[(key, Some(value))])
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.apply(&[(key, None)])
    }
}

fn apply_to(map: &mut BTreeMap<String, String>, changes: &[Change<'_>]) {
    for (key, value) in changes {
        match value {
            Some(value) => {
                map.insert((*key).to_string(), (*value).to_string());
            }
            None => {
                map.remove(*key);
            }
        }
    }
}

/// In-memory storage. Clones share the same map, so a test can keep a
/// handle on what the session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn apply(&self, changes: &[Change<'_>]) -> Result<()> {
        apply_to(&mut self.entries.lock(), changes);
        Ok(())
    }
}

/// JSON file storage.
///
/// The whole map is rewritten on every change through a temporary file and
/// a rename, so a crash never leaves half a session on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<config_dir>/blog-client/session.json`, or a dotfile in the working
    /// directory on platforms without a config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("blog-client").join("session.json"))
            .unwrap_or_else(|| PathBuf::from(".blog-client-session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!(
                "corrupt session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn store(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.load()?.get(key).cloned())
    }

    fn apply(&self, changes: &[Change<'_>]) -> Result<()> {
        let _guard = self.lock.lock();
        let mut map = match self.load() {
            Ok(map) => map,
            Err(e) => {
                // A corrupt file must not block logout or a fresh login
                tracing::warn!(error = %e, "Discarding unreadable session file");
                BTreeMap::new()
            }
        };
        apply_to(&mut map, changes);
        self.store(&map)
    }
}
