//! Favorites stores.
//!
//! Two implementations of one port: [`LocalFavoritesStore`] keeps the whole
//! list as a JSON array under a single storage key, and
//! [`RemoteFavoritesStore`] delegates to the engine's favorites endpoints.
//! `list` only checks the derived fields of each record; `load` runs the
//! full `revalidate` pass.

use async_trait::async_trait;
use charforge_domain::{revalidate, revalidate_derived, CharacterRecord, FavoriteId, Normalized};
use charforge_shared::{routes, SaveFavoriteRequest, SaveFavoriteResponse};
use serde_json::Value;

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::ports::outbound::{storage_keys, StorageProvider, TimeProvider};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesPort: Send + Sync {
    /// Store a copy of `record` under a fresh id and return the stored copy.
    async fn add(&self, record: &CharacterRecord) -> Result<CharacterRecord, ServiceError>;

    /// Every favorite, oldest first.
    async fn list(&self) -> Result<Vec<CharacterRecord>, ServiceError>;

    /// Remove every favorite carrying `id`. Unknown ids are not an error.
    async fn delete(&self, id: FavoriteId) -> Result<(), ServiceError>;

    /// The favorite with `id`, re-validated, or `None`.
    async fn load(&self, id: FavoriteId) -> Result<Option<Normalized>, ServiceError>;
}

fn find_and_revalidate(raw: Vec<Value>, id: FavoriteId) -> Option<Normalized> {
    raw.into_iter()
        .find(|value| FavoriteId::of_record(value) == Some(id))
        .map(revalidate)
}

fn check_all(raw: Vec<Value>) -> Vec<CharacterRecord> {
    raw.into_iter()
        .map(|value| revalidate_derived(value).record)
        .collect()
}

// =============================================================================
// Local store
// =============================================================================

pub struct LocalFavoritesStore<S: StorageProvider, T: TimeProvider> {
    storage: S,
    time: T,
}

impl<S: StorageProvider, T: TimeProvider> LocalFavoritesStore<S, T> {
    pub fn new(storage: S, time: T) -> Self {
        Self { storage, time }
    }

    fn read_all(&self) -> Result<Vec<Value>, ServiceError> {
        let Some(text) = self.storage.load(storage_keys::FAVORITES) else {
            return Ok(Vec::new());
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|e| ServiceError::Corrupt(e.to_string()))
    }

    fn write_all(&self, favorites: &[Value]) -> Result<(), ServiceError> {
        let text =
            serde_json::to_string(favorites).map_err(|e| ServiceError::Corrupt(e.to_string()))?;
        self.storage
            .save(storage_keys::FAVORITES, &text)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to persist favorites");
                ServiceError::from(e)
            })
    }
}

#[async_trait]
impl<S, T> FavoritesPort for LocalFavoritesStore<S, T>
where
    S: StorageProvider + Send + Sync,
    T: TimeProvider + Send + Sync,
{
    async fn add(&self, record: &CharacterRecord) -> Result<CharacterRecord, ServiceError> {
        let mut favorites = self.read_all()?;

        let id = FavoriteId::next(
            self.time.now_millis(),
            favorites.iter().filter_map(FavoriteId::of_record),
        );
        let stored = record.clone().with_id(id);
        favorites.push(
            serde_json::to_value(&stored).map_err(|e| ServiceError::Corrupt(e.to_string()))?,
        );

        self.write_all(&favorites)?;
        tracing::info!(id = %id, name = %stored.name, "Saved favorite locally");
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<CharacterRecord>, ServiceError> {
        Ok(check_all(self.read_all()?))
    }

    async fn delete(&self, id: FavoriteId) -> Result<(), ServiceError> {
        let mut favorites = self.read_all()?;
        favorites.retain(|value| FavoriteId::of_record(value) != Some(id));
        self.write_all(&favorites)?;
        tracing::info!(id = %id, "Deleted local favorite");
        Ok(())
    }

    async fn load(&self, id: FavoriteId) -> Result<Option<Normalized>, ServiceError> {
        Ok(find_and_revalidate(self.read_all()?, id))
    }
}

// =============================================================================
// Remote store
// =============================================================================

pub struct RemoteFavoritesStore {
    api: Api,
}

impl RemoteFavoritesStore {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    async fn fetch_all(&self) -> Result<Vec<Value>, ServiceError> {
        Ok(self.api.get::<Vec<Value>>(routes::FAVORITES).await?)
    }
}

#[async_trait]
impl FavoritesPort for RemoteFavoritesStore {
    async fn add(&self, record: &CharacterRecord) -> Result<CharacterRecord, ServiceError> {
        let character =
            serde_json::to_value(record).map_err(|e| ServiceError::Corrupt(e.to_string()))?;
        let response: SaveFavoriteResponse = self
            .api
            .post(routes::FAVORITES, &SaveFavoriteRequest::new(character))
            .await?;
        tracing::info!(id = %response.id, name = %record.name, "Saved favorite on engine");
        Ok(record.clone().with_id(response.id))
    }

    async fn list(&self) -> Result<Vec<CharacterRecord>, ServiceError> {
        Ok(check_all(self.fetch_all().await?))
    }

    async fn delete(&self, id: FavoriteId) -> Result<(), ServiceError> {
        self.api.delete(&routes::favorite(id)).await?;
        Ok(())
    }

    async fn load(&self, id: FavoriteId) -> Result<Option<Normalized>, ServiceError> {
        Ok(find_and_revalidate(self.fetch_all().await?, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{FixedTimeProvider, InMemoryStorageProvider};
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use charforge_domain::{AbilityScores, Money, Repair};
    use serde_json::json;
    use std::sync::Arc;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn record(name: &str) -> CharacterRecord {
        let mut record = CharacterRecord::with_scores(AbilityScores::new([15, 14, 13, 12, 10, 8]));
        record.name = name.to_string();
        record
    }

    fn local(
        storage: InMemoryStorageProvider,
    ) -> LocalFavoritesStore<InMemoryStorageProvider, FixedTimeProvider> {
        LocalFavoritesStore::new(storage, FixedTimeProvider(NOW_MS))
    }

    #[tokio::test]
    async fn local_round_trip() {
        let store = local(InMemoryStorageProvider::new());
        assert!(store.list().await.expect("list").is_empty());

        let saved = store.add(&record("Mira")).await.expect("add");
        assert_eq!(saved.id, Some(FavoriteId::new(NOW_MS)));

        let listed = store.list().await.expect("list");
        assert_eq!(listed, vec![saved.clone()]);

        store.delete(FavoriteId::new(NOW_MS)).await.expect("delete");
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn list_returns_the_record_that_was_added() {
        let store = local(InMemoryStorageProvider::new());
        let mut character = record("Mira");
        character.money = Some(Money::Text("25 gp".into()));
        character.languages = vec!["Common".into(), "Common".into()];

        let saved = store.add(&character).await.expect("add");
        let id = saved.id.expect("id");

        let listed = store.list().await.expect("list");
        assert_eq!(listed, vec![character.with_id(id)]);
        assert_eq!(listed[0].money_gp_total, None);
    }

    #[tokio::test]
    async fn local_ids_are_unique_within_one_millisecond() {
        let store = local(InMemoryStorageProvider::new());
        let first = store.add(&record("A")).await.expect("add");
        let second = store.add(&record("B")).await.expect("add");

        assert_eq!(first.id, Some(FavoriteId::new(NOW_MS)));
        assert_eq!(second.id, Some(FavoriteId::new(NOW_MS + 1)));

        let names: Vec<String> = store
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn local_list_is_one_json_array_under_bucket_key() {
        let storage = InMemoryStorageProvider::new();
        let store = local(storage.clone());
        store.add(&record("Mira")).await.expect("add");

        let text = storage.load(storage_keys::FAVORITES).expect("bucket");
        let value: Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["id"], json!(NOW_MS));
    }

    #[tokio::test]
    async fn load_revalidates_stored_modifiers() {
        let stored = json!([{
            "id": 7,
            "name": "Old Save",
            "ability_scores": [16, 12, 10, 8, 14, 11],
            "modifiers": [3, 1]
        }]);
        let storage = InMemoryStorageProvider::new()
            .with_value(storage_keys::FAVORITES, &stored.to_string());

        let loaded = local(storage)
            .load(FavoriteId::new(7))
            .await
            .expect("load")
            .expect("found");

        assert_eq!(loaded.record.modifiers.as_array(), &[3, 1, 0, -1, 2, 0]);
        assert!(loaded.repairs.contains(Repair::ModifiersRecomputed));
        assert_eq!(loaded.record.id, Some(FavoriteId::new(7)));
    }

    #[tokio::test]
    async fn load_unknown_id_is_none() {
        let store = local(InMemoryStorageProvider::new());
        store.add(&record("Mira")).await.expect("add");
        assert!(store.load(FavoriteId::new(1)).await.expect("load").is_none());
    }

    #[tokio::test]
    async fn delete_removes_every_duplicate_id() {
        let stored = json!([
            {"id": 5, "name": "A"},
            {"id": "5", "name": "B"},
            {"id": 6, "name": "C"}
        ]);
        let storage = InMemoryStorageProvider::new()
            .with_value(storage_keys::FAVORITES, &stored.to_string());
        let store = local(storage);

        store.delete(FavoriteId::new(5)).await.expect("delete");
        let remaining = store.list().await.expect("list");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "C");
    }

    #[tokio::test]
    async fn corrupt_bucket_is_an_error() {
        let storage =
            InMemoryStorageProvider::new().with_value(storage_keys::FAVORITES, "{not json");
        let err = local(storage).list().await.expect_err("corrupt");
        assert!(matches!(err, ServiceError::Corrupt(_)));
    }

    #[tokio::test]
    async fn write_failure_is_surfaced() {
        let store = local(InMemoryStorageProvider::failing());
        let err = store.add(&record("Mira")).await.expect_err("disk full");
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[tokio::test]
    async fn remote_add_uses_engine_id() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == routes::FAVORITES && body["character"]["name"] == "Mira")
            .times(1)
            .returning(|_, _| Ok(json!({"ok": true, "id": NOW_MS})));

        let store = RemoteFavoritesStore::new(Api::new(Arc::new(raw)));
        let saved = store.add(&record("Mira")).await.expect("add");
        assert_eq!(saved.id, Some(FavoriteId::new(NOW_MS)));
    }

    #[tokio::test]
    async fn remote_list_and_load() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == routes::FAVORITES)
            .times(2)
            .returning(|_| {
                Ok(json!([
                    {"id": 1, "name": "A", "ability_scores": [10, 10, 10, 10, 10, 10]},
                    {"id": 2, "name": "B", "ability_scores": [18, 3, 10, 10, 10, 10]}
                ]))
            });

        let store = RemoteFavoritesStore::new(Api::new(Arc::new(raw)));
        assert_eq!(store.list().await.expect("list").len(), 2);

        let loaded = store
            .load(FavoriteId::new(2))
            .await
            .expect("load")
            .expect("found");
        assert_eq!(loaded.record.name, "B");
        assert_eq!(loaded.record.modifiers.as_array(), &[4, -4, 0, 0, 0, 0]);
    }

    #[tokio::test]
    async fn remote_delete_hits_item_route() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .withf(|path| path == "/api/favorites/42")
            .times(1)
            .returning(|_| Ok(()));

        let store = RemoteFavoritesStore::new(Api::new(Arc::new(raw)));
        store.delete(FavoriteId::new(42)).await.expect("delete");
    }

    #[tokio::test]
    async fn remote_failure_is_api_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Err(crate::infrastructure::testing::api_request_failed("refused")));

        let store = RemoteFavoritesStore::new(Api::new(Arc::new(raw)));
        let err = store.list().await.expect_err("offline");
        assert_eq!(err, ServiceError::Api(ApiError::RequestFailed("refused".into())));
    }
}
