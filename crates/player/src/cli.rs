//! Command line of the player binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use charforge_domain::FavoriteId;
use charforge_shared::PronounChoice;

use crate::application::services::GenerateForm;
use crate::infrastructure::http_client::DEFAULT_ENGINE_URL;

#[derive(Debug, Parser)]
#[command(name = "charforge-player")]
#[command(about = "Generate character sheets and keep favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the charforge engine
    #[arg(long, env = "CHARFORGE_ENGINE_URL", default_value = DEFAULT_ENGINE_URL)]
    pub engine_url: String,

    /// Where favorites are kept
    #[arg(long, env = "CHARFORGE_STORE", value_enum, default_value_t = StoreKind::Local)]
    pub store: StoreKind,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// A JSON file on this machine
    Local,
    /// The engine's favorites endpoints
    Remote,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a character and print its sheet
    Generate(GenerateArgs),
    /// Saved characters
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Character name; random when blank
    #[arg(long, default_value = "")]
    pub name: String,

    /// they/them, she/her, he/him or custom
    #[arg(long, default_value = "they/them")]
    pub pronouns: PronounChoice,

    /// Pronouns used with `--pronouns custom`
    #[arg(long)]
    pub custom_pronouns: Option<String>,

    #[arg(long, default_value = "")]
    pub gender: String,

    /// Stat method: 4d6, standard or pointbuy
    #[arg(long, default_value = "4d6")]
    pub method: String,

    /// Save the generated character as a favorite
    #[arg(long)]
    pub save: bool,

    /// Also print the plain-text export
    #[arg(long)]
    pub export: bool,
}

impl GenerateArgs {
    pub fn to_form(&self) -> GenerateForm {
        GenerateForm {
            name: self.name.clone(),
            pronouns: self.pronouns,
            custom_pronouns: self.custom_pronouns.clone().unwrap_or_default(),
            gender: self.gender.clone(),
            method: self.method.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List saved characters, oldest first
    List,
    /// Print a saved character's sheet
    Show {
        id: FavoriteId,
        /// Also print the plain-text export
        #[arg(long)]
        export: bool,
    },
    /// Delete a saved character
    Delete { id: FavoriteId },
}
