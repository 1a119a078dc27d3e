//! Platform DI Container
//!
//! `Platform` aggregates the clock, the random source and the key-value
//! storage behind one cloneable value. It implements the provider traits
//! itself, so services generic over a provider can take a `Platform`.

use std::sync::Arc;

use crate::ports::outbound::{RandomProvider, StorageError, StorageProvider, TimeProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn erased::TimeProviderDyn>,
    random: Arc<dyn erased::RandomProviderDyn>,
    storage: Arc<dyn erased::StorageProviderDyn>,
}

/// Dyn-safe mirrors of the port traits, kept out of scope at call sites so
/// method calls on a `Platform` resolve to the port traits alone.
mod erased {
    use crate::ports::outbound::{RandomProvider, StorageError, StorageProvider, TimeProvider};

    pub(super) trait TimeProviderDyn: Send + Sync {
        fn now_millis(&self) -> i64;
    }

    pub(super) trait RandomProviderDyn: Send + Sync {
        fn random_range(&self, min: i32, max: i32) -> i32;
    }

    pub(super) trait StorageProviderDyn: Send + Sync {
        fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
        fn load(&self, key: &str) -> Option<String>;
        fn remove(&self, key: &str) -> Result<(), StorageError>;
    }

    // Blanket implementations: any port implementation can sit behind an Arc.

    impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
        fn now_millis(&self) -> i64 {
            TimeProvider::now_millis(self)
        }
    }

    impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
        fn random_range(&self, min: i32, max: i32) -> i32 {
            RandomProvider::random_range(self, min, max)
        }
    }

    impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            StorageProvider::save(self, key, value)
        }
        fn load(&self, key: &str) -> Option<String> {
            StorageProvider::load(self, key)
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            StorageProvider::remove(self, key)
        }
    }
}

impl Platform {
    pub fn new<T, R, S>(time: T, random: R, storage: S) -> Self
    where
        T: TimeProvider + Send + Sync,
        R: RandomProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            random: Arc::new(random),
            storage: Arc::new(storage),
        }
    }
}

impl TimeProvider for Platform {
    fn now_millis(&self) -> i64 {
        self.time.now_millis()
    }
}

impl RandomProvider for Platform {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.random.random_range(min, max)
    }
}

impl StorageProvider for Platform {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove(key)
    }
}
