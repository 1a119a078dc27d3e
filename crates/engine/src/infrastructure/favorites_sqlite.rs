//! SQLite-backed favorites storage.

use async_trait::async_trait;
use charforge_domain::{CharacterRecord, FavoriteId};
use serde_json::Value;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{FavoritesRepo, RepoError};

/// SQLite implementation for favorite characters.
///
/// Each row holds the record JSON (including its id) keyed by the favorite id.
pub struct SqliteFavoritesRepo {
    pool: SqlitePool,
}

impl SqliteFavoritesRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("favorites_connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                id INTEGER PRIMARY KEY,
                record_json TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("favorites_schema", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl FavoritesRepo for SqliteFavoritesRepo {
    async fn list(&self) -> Result<Vec<Value>, RepoError> {
        let rows = sqlx::query("SELECT record_json FROM favorites ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("favorites_list", e))?;

        rows.iter()
            .map(|row| {
                let json: String = row.get("record_json");
                serde_json::from_str(&json).map_err(RepoError::serialization)
            })
            .collect()
    }

    async fn add(
        &self,
        record: CharacterRecord,
        now_ms: i64,
    ) -> Result<CharacterRecord, RepoError> {
        // IMMEDIATE takes the write lock up front, so a second writer waits
        // here instead of reading the same MAX(id).
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| RepoError::database("favorites_add", e))?;

        let newest: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM favorites")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepoError::database("favorites_add", e))?;

        let id = FavoriteId::next(now_ms, newest.map(FavoriteId::new));
        let record = record.with_id(id);
        let json = serde_json::to_string(&record).map_err(RepoError::serialization)?;

        sqlx::query("INSERT INTO favorites (id, record_json) VALUES (?, ?)")
            .bind(id.value())
            .bind(json)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("favorites_add", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("favorites_add", e))?;

        Ok(record)
    }

    async fn delete(&self, id: FavoriteId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("favorites_delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
