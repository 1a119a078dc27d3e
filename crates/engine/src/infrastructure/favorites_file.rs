//! JSON-file favorites storage.
//!
//! The whole list lives in one pretty-printed JSON array. Every operation
//! reads the file, and writes go through a temporary file that is renamed
//! over the original. A process-wide mutex serializes access.

use async_trait::async_trait;
use charforge_domain::{CharacterRecord, FavoriteId};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{FavoritesRepo, RepoError};

pub struct JsonFileFavoritesRepo {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileFavoritesRepo {
    /// Open the store, creating an empty list when the file does not exist.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let path = path.into();
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|e| RepoError::io("favorites_open", e))?
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepoError::io("favorites_open", e))?;
            }
            write_atomic(&path, &[]).await?;
            tracing::info!(path = %path.display(), "Created empty favorites file");
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Value>, RepoError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| RepoError::io("favorites_read", e))?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(RepoError::serialization)
    }
}

#[async_trait]
impl FavoritesRepo for JsonFileFavoritesRepo {
    async fn list(&self) -> Result<Vec<Value>, RepoError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn add(
        &self,
        record: CharacterRecord,
        now_ms: i64,
    ) -> Result<CharacterRecord, RepoError> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.read_all().await?;

        let id = FavoriteId::next(now_ms, favorites.iter().filter_map(FavoriteId::of_record));
        let record = record.with_id(id);
        favorites.push(serde_json::to_value(&record).map_err(RepoError::serialization)?);

        write_atomic(&self.path, &favorites).await?;
        Ok(record)
    }

    async fn delete(&self, id: FavoriteId) -> Result<bool, RepoError> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.read_all().await?;

        let before = favorites.len();
        favorites.retain(|value| FavoriteId::of_record(value) != Some(id));
        if favorites.len() == before {
            return Ok(false);
        }

        write_atomic(&self.path, &favorites).await?;
        Ok(true)
    }
}

async fn write_atomic(path: &Path, favorites: &[Value]) -> Result<(), RepoError> {
    let json = serde_json::to_string_pretty(favorites).map_err(RepoError::serialization)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|e| RepoError::io("favorites_write", e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| RepoError::io("favorites_write", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_domain::AbilityScores;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(name: &str) -> CharacterRecord {
        let mut record = CharacterRecord::with_scores(AbilityScores::neutral());
        record.name = name.to_string();
        record
    }

    async fn repo(dir: &TempDir) -> JsonFileFavoritesRepo {
        JsonFileFavoritesRepo::new(dir.path().join("favorites.json"))
            .await
            .expect("open repo")
    }

    #[tokio::test]
    async fn creates_empty_file() {
        let dir = TempDir::new().expect("tempdir");
        let repo = repo(&dir).await;

        let text = std::fs::read_to_string(repo.path()).expect("read");
        assert_eq!(text.trim(), "[]");
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn add_list_delete_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let repo = repo(&dir).await;

        let saved = repo.add(record("Ash"), 1_000).await.expect("add");
        assert_eq!(saved.id, Some(FavoriteId::new(1_000)));

        let listed = repo.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], json!("Ash"));
        assert_eq!(listed[0]["id"], json!(1_000));

        assert!(repo.delete(FavoriteId::new(1_000)).await.expect("delete"));
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn same_millisecond_saves_get_distinct_ids() {
        let dir = TempDir::new().expect("tempdir");
        let repo = repo(&dir).await;

        let first = repo.add(record("Ash"), 5_000).await.expect("add");
        let second = repo.add(record("Kai"), 5_000).await.expect("add");
        assert_eq!(first.id, Some(FavoriteId::new(5_000)));
        assert_eq!(second.id, Some(FavoriteId::new(5_001)));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_no_op() {
        let dir = TempDir::new().expect("tempdir");
        let repo = repo(&dir).await;
        repo.add(record("Ash"), 1).await.expect("add");

        assert!(!repo.delete(FavoriteId::new(99)).await.expect("delete"));
        assert_eq!(repo.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn keeps_entries_written_by_older_versions() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"[{"name": "Legacy", "id": "7"}]"#).expect("seed");

        let repo = JsonFileFavoritesRepo::new(&path).await.expect("open");
        let saved = repo.add(record("New"), 3).await.expect("add");
        assert_eq!(saved.id, Some(FavoriteId::new(8)));

        assert!(repo.delete(FavoriteId::new(7)).await.expect("delete"));
        let listed = repo.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], json!("New"));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").expect("seed");

        let repo = JsonFileFavoritesRepo::new(&path).await.expect("open");
        assert!(matches!(repo.list().await, Err(RepoError::Serialization(_))));
    }
}
