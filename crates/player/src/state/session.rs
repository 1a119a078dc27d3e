//! Session state and the handlers that move it forward.
//!
//! The state is a plain value owned by the caller. Every handler borrows the
//! current state and returns the next one, so a failed handler leaves the
//! caller holding the state it had before.

use charforge_domain::{CharacterRecord, FavoriteId, RepairReport};

use crate::application::error::ServiceError;
use crate::application::services::{FavoritesPort, GenerateForm, GeneratorService};
use crate::ports::outbound::RandomProvider;

/// Which panel the presenter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Empty,
    Sheet,
    Favorites,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub screen: Screen,
    /// The character on the sheet; what "save" stores
    pub current: Option<CharacterRecord>,
    /// Repairs applied to `current` when it was generated or loaded
    pub repairs: RepairReport,
    /// Last fetched favorites list
    pub favorites: Vec<CharacterRecord>,
    pub last_saved: Option<FavoriteId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request a character and show it.
///
/// Any failure is logged and the prior state is returned unchanged.
pub async fn generate<R: RandomProvider>(
    state: &SessionState,
    generator: &GeneratorService<R>,
    form: &GenerateForm,
) -> SessionState {
    match generator.generate(form).await {
        Ok(normalized) => SessionState {
            screen: Screen::Sheet,
            current: Some(normalized.record),
            repairs: normalized.repairs,
            ..state.clone()
        },
        Err(e) => {
            tracing::warn!(error = %e, "Character generation failed; keeping previous sheet");
            state.clone()
        }
    }
}

/// Save the current character and refresh the favorites list.
///
/// Without a current character this is a no-op.
pub async fn save_current(
    state: &SessionState,
    store: &dyn FavoritesPort,
) -> Result<SessionState, ServiceError> {
    let Some(current) = &state.current else {
        return Ok(state.clone());
    };
    let saved = store.add(current).await?;
    let favorites = store.list().await?;
    Ok(SessionState {
        favorites,
        last_saved: saved.id,
        ..state.clone()
    })
}

/// Fetch the favorites list and switch to it.
pub async fn show_favorites(
    state: &SessionState,
    store: &dyn FavoritesPort,
) -> Result<SessionState, ServiceError> {
    let favorites = store.list().await?;
    Ok(SessionState {
        screen: Screen::Favorites,
        favorites,
        ..state.clone()
    })
}

/// Put a saved favorite on the sheet.
pub async fn load_favorite(
    state: &SessionState,
    store: &dyn FavoritesPort,
    id: FavoriteId,
) -> Result<SessionState, ServiceError> {
    let normalized = store.load(id).await?.ok_or(ServiceError::NotFound(id))?;
    if normalized.repairs.was_repaired() {
        tracing::debug!(id = %id, repairs = ?normalized.repairs.repairs(), "Repaired stored favorite");
    }
    Ok(SessionState {
        screen: Screen::Sheet,
        current: Some(normalized.record),
        repairs: normalized.repairs,
        ..state.clone()
    })
}

/// Delete a favorite and refresh the list.
pub async fn delete_favorite(
    state: &SessionState,
    store: &dyn FavoritesPort,
    id: FavoriteId,
) -> Result<SessionState, ServiceError> {
    store.delete(id).await?;
    let favorites = store.list().await?;
    Ok(SessionState {
        favorites,
        ..state.clone()
    })
}

/// Leave the favorites list; back to the sheet, or the empty panel.
pub fn back_to_sheet(state: &SessionState) -> SessionState {
    let screen = if state.current.is_some() {
        Screen::Sheet
    } else {
        Screen::Empty
    };
    SessionState {
        screen,
        ..state.clone()
    }
}

/// Forget the current character.
pub fn clear(state: &SessionState) -> SessionState {
    SessionState {
        screen: Screen::Empty,
        current: None,
        repairs: RepairReport::default(),
        ..state.clone()
    }
}
