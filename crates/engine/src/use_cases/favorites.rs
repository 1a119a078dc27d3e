//! Favorites use cases: list, save and delete stored characters.

use std::sync::Arc;

use charforge_domain::{lenient::is_truthy, revalidate_derived, CharacterRecord, FavoriteId};
use serde_json::Value;

use crate::infrastructure::ports::{ClockPort, FavoritesRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("No character provided")]
    MissingCharacter,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Favorites operations over the configured store.
///
/// Scores, modifiers and the average are checked on the way in and on the way
/// out, so a list never contains a sheet without six scores and six
/// modifiers. Everything else is stored and returned as posted.
pub struct FavoritesOps {
    repo: Arc<dyn FavoritesRepo>,
    clock: Arc<dyn ClockPort>,
}

impl FavoritesOps {
    pub fn new(repo: Arc<dyn FavoritesRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// All favorites, oldest first.
    pub async fn list(&self) -> Result<Vec<CharacterRecord>, FavoritesError> {
        let stored = self.repo.list().await?;
        Ok(stored
            .into_iter()
            .map(|raw| {
                let normalized = revalidate_derived(raw);
                if normalized.repairs.was_repaired() {
                    tracing::debug!(
                        id = ?normalized.record.id,
                        repairs = ?normalized.repairs.repairs(),
                        "Repaired stored favorite"
                    );
                }
                normalized.record
            })
            .collect())
    }

    /// Save a character and return its new id.
    ///
    /// Any id carried by the payload is replaced.
    pub async fn save(&self, character: Option<Value>) -> Result<FavoriteId, FavoritesError> {
        let raw = character
            .filter(is_truthy)
            .ok_or(FavoritesError::MissingCharacter)?;

        let normalized = revalidate_derived(raw);
        if normalized.repairs.was_repaired() {
            tracing::debug!(repairs = ?normalized.repairs.repairs(), "Repaired favorite before saving");
        }

        let now_ms = self.clock.now().timestamp_millis();
        let saved = self.repo.add(normalized.record.without_id(), now_ms).await?;
        let id = saved
            .id
            .ok_or_else(|| RepoError::serialization("store returned a favorite without id"))?;

        tracing::info!(id = %id, name = %saved.name, "Saved favorite");
        Ok(id)
    }

    /// Delete a favorite. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: FavoriteId) -> Result<bool, FavoritesError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(id = %id, "Deleted favorite");
        } else {
            tracing::debug!(id = %id, "Favorite to delete was not found");
        }
        Ok(removed)
    }
}
