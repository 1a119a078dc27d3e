//! In-memory platform providers for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::ports::outbound::{ApiError, RandomProvider, StorageError, StorageProvider, TimeProvider};

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Key-value storage held in memory; clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, for error-path tests.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::io("write", "disk full"));
        }
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::io("write", "disk full"));
        }
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}

/// A clock that never moves.
#[derive(Clone, Copy)]
pub struct FixedTimeProvider(pub i64);

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Random provider that replays a script, then falls back to `min`.
#[derive(Clone, Default)]
pub struct ScriptedRandomProvider {
    script: Arc<Mutex<VecDeque<i32>>>,
}

impl ScriptedRandomProvider {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: Arc::new(Mutex::new(values.into_iter().collect())),
        }
    }

    /// Always the lowest value in range.
    pub fn lowest() -> Self {
        Self::default()
    }
}

impl RandomProvider for ScriptedRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or(min).clamp(min, max.max(min))
    }
}
