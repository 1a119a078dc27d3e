pub mod text;
pub mod view_models;

pub use text::{export_text, render_favorites, render_sheet};
pub use view_models::{
    AbilityRow, FavoriteCard, FavoritesView, SheetView, NO_FAVORITES_PLACEHOLDER,
};
