//! Runs one CLI command against a session.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use crate::application::services::{
    FavoritesPort, GeneratorService, LocalFavoritesStore, RemoteFavoritesStore,
};
use crate::application::Api;
use crate::cli::{Cli, Command, FavoritesCommand, GenerateArgs, StoreKind};
use crate::infrastructure::http_client::ApiAdapter;
use crate::infrastructure::platform::create_platform;
use crate::ports::outbound::{RandomProvider, RawApiPort};
use crate::state::session::{self, SessionState};
use crate::state::Platform;
use crate::ui::presentation::{export_text, render_favorites, render_sheet, FavoritesView, SheetView};

pub struct RunnerDeps<R: RandomProvider> {
    pub generator: GeneratorService<R>,
    pub favorites: Arc<dyn FavoritesPort>,
}

impl RunnerDeps<Platform> {
    /// Wire the desktop platform, the HTTP adapter and the chosen store.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let platform = create_platform();
        let raw_api: Arc<dyn RawApiPort> = Arc::new(
            ApiAdapter::new(&cli.engine_url)
                .with_context(|| format!("invalid engine URL {}", cli.engine_url))?,
        );
        let api = Api::new(raw_api);

        let favorites: Arc<dyn FavoritesPort> = match cli.store {
            StoreKind::Local => Arc::new(LocalFavoritesStore::new(platform.clone(), platform.clone())),
            StoreKind::Remote => Arc::new(RemoteFavoritesStore::new(api.clone())),
        };

        Ok(Self {
            generator: GeneratorService::new(api, platform),
            favorites,
        })
    }
}

/// Execute `command`, writing everything the user sees to `out`.
pub async fn run<R: RandomProvider>(
    deps: &RunnerDeps<R>,
    command: &Command,
    out: &mut impl Write,
) -> anyhow::Result<SessionState> {
    let state = SessionState::new();
    let store = deps.favorites.as_ref();

    match command {
        Command::Generate(args) => run_generate(deps, args, state, out).await,
        Command::Favorites { command } => match command {
            FavoritesCommand::List => {
                let state = session::show_favorites(&state, store).await?;
                write!(out, "{}", render_favorites(&FavoritesView::from_records(&state.favorites)))?;
                Ok(state)
            }
            FavoritesCommand::Show { id, export } => {
                let state = session::load_favorite(&state, store, *id).await?;
                if let Some(current) = &state.current {
                    write!(out, "{}", render_sheet(&SheetView::from_record(current)))?;
                    if *export {
                        write!(out, "\n{}", export_text(current))?;
                    }
                }
                Ok(state)
            }
            FavoritesCommand::Delete { id } => {
                let state = session::delete_favorite(&state, store, *id).await?;
                writeln!(out, "Deleted favorite {id}")?;
                Ok(state)
            }
        },
    }
}

async fn run_generate<R: RandomProvider>(
    deps: &RunnerDeps<R>,
    args: &GenerateArgs,
    state: SessionState,
    out: &mut impl Write,
) -> anyhow::Result<SessionState> {
    let state = session::generate(&state, &deps.generator, &args.to_form()).await;
    let Some(current) = &state.current else {
        return Ok(state);
    };

    write!(out, "{}", render_sheet(&SheetView::from_record(current)))?;
    if args.export {
        write!(out, "\n{}", export_text(current))?;
    }
    if !args.save {
        return Ok(state);
    }

    let state = session::save_current(&state, deps.favorites.as_ref()).await?;
    if let Some(id) = state.last_saved {
        writeln!(out, "\nSaved favorite {id}")?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{
        FixedTimeProvider, InMemoryStorageProvider, ScriptedRandomProvider,
    };
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use charforge_domain::FavoriteId;
    use charforge_shared::PronounChoice;
    use serde_json::json;

    fn deps(raw: MockRawApiPort) -> RunnerDeps<ScriptedRandomProvider> {
        RunnerDeps {
            generator: GeneratorService::new(
                Api::new(Arc::new(raw)),
                ScriptedRandomProvider::lowest(),
            ),
            favorites: Arc::new(LocalFavoritesStore::new(
                InMemoryStorageProvider::new(),
                FixedTimeProvider(1_700_000_000_000),
            )),
        }
    }

    fn generate_args(save: bool, export: bool) -> GenerateArgs {
        GenerateArgs {
            name: String::new(),
            pronouns: PronounChoice::TheyThem,
            custom_pronouns: None,
            gender: String::new(),
            method: "4d6".into(),
            save,
            export,
        }
    }

    fn engine_character() -> MockRawApiPort {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Ok(json!({
                "name": "Rowan Gale",
                "pronouns": "they/them",
                "class": "Bard",
                "ability_scores": [10, 12, 14, 8, 13, 15],
                "money": "15 gp"
            }))
        });
        raw
    }

    #[tokio::test]
    async fn generate_save_and_list() {
        let deps = deps(engine_character());
        let mut out = Vec::new();

        let state = run(&deps, &Command::Generate(generate_args(true, true)), &mut out)
            .await
            .expect("generate");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.starts_with("Rowan Gale\n"));
        assert!(text.contains("Modifiers: [0, 1, 2, -1, 1, 2]"));
        assert!(text.contains("Total value: 15 gp"));
        assert!(text.contains("Saved favorite 1700000000000"));
        assert_eq!(state.last_saved, Some(FavoriteId::new(1_700_000_000_000)));

        let mut out = Vec::new();
        let list = Command::Favorites {
            command: FavoritesCommand::List,
        };
        run(&deps, &list, &mut out).await.expect("list");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("[1700000000000] Rowan Gale\n"));
    }

    #[tokio::test]
    async fn engine_outage_prints_nothing() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::RequestFailed("connection refused".into())));
        let deps = deps(raw);
        let mut out = Vec::new();

        let state = run(&deps, &Command::Generate(generate_args(true, false)), &mut out)
            .await
            .expect("silent abort");

        assert!(out.is_empty());
        assert_eq!(state, SessionState::new());
    }

    #[tokio::test]
    async fn empty_favorites_list_shows_placeholder() {
        let deps = deps(MockRawApiPort::new());
        let mut out = Vec::new();
        let list = Command::Favorites {
            command: FavoritesCommand::List,
        };
        run(&deps, &list, &mut out).await.expect("list");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "No favorites yet — save a character to see it here.\n"
        );
    }

    #[tokio::test]
    async fn show_unknown_favorite_fails() {
        let deps = deps(MockRawApiPort::new());
        let show = Command::Favorites {
            command: FavoritesCommand::Show {
                id: FavoriteId::new(3),
                export: false,
            },
        };
        let err = run(&deps, &show, &mut Vec::new()).await.expect_err("missing");
        assert_eq!(err.to_string(), "Favorite 3 not found");
    }
}
