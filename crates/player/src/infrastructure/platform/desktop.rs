//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{RandomProvider, StorageError, StorageProvider, TimeProvider};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Overrides the storage file location.
pub const STORAGE_FILE_ENV: &str = "CHARFORGE_STORAGE_FILE";

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Desktop random provider using rand crate
#[derive(Clone, Default)]
pub struct DesktopRandomProvider;

impl RandomProvider for DesktopRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/charforge/player/storage.json
/// - macOS: ~/Library/Application Support/io.charforge.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\charforge\player\storage.json
///
/// `CHARFORGE_STORAGE_FILE` replaces the location.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the configured or platform default path.
    pub fn new() -> Self {
        Self::at(default_storage_path())
    }

    /// Create a storage provider backed by `storage_path`.
    ///
    /// Loads existing data from the file if it exists. An unreadable file
    /// starts empty and is replaced on the next write.
    pub fn at(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self
            .storage_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create storage directory: {}", e);
                StorageError::io("create_dir", e)
            })?;
        }

        let data = {
            let cache = self.cache.read().map_err(|_| StorageError::Poisoned)?;
            serde_json::to_string_pretty(&*cache).map_err(|e| StorageError::io("serialize", e))?
        };

        fs::write(&self.storage_path, data).map_err(|e| {
            tracing::error!("Failed to write storage file: {}", e);
            StorageError::io("write", e)
        })
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        {
            let mut guard = self.cache.write().map_err(|_| StorageError::Poisoned)?;
            guard.insert(key.to_string(), value.to_string());
        }
        self.persist()
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        {
            let mut guard = self.cache.write().map_err(|_| StorageError::Poisoned)?;
            guard.remove(key);
        }
        self.persist()
    }
}

fn default_storage_path() -> PathBuf {
    if let Some(path) = std::env::var_os(STORAGE_FILE_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(dirs) = ProjectDirs::from("io", "charforge", "player") {
        dirs.config_dir().join("storage.json")
    } else {
        PathBuf::from("charforge_storage.json")
    }
}
