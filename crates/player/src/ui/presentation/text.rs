//! Plain-text rendering: the terminal sheet, the favorites list and the
//! clipboard export.

use std::fmt::Write as _;

use charforge_domain::{format_money, CharacterRecord};

use super::view_models::{
    age_text, modifier_list, money_lines, subtitle, FavoritesView, SheetView,
};

pub fn render_sheet(view: &SheetView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.name);
    let _ = writeln!(out, "{}", view.subtitle);
    out.push('\n');
    let _ = writeln!(out, "Background: {}", view.background);
    let _ = writeln!(out, "  {}", view.traits);
    let _ = writeln!(out, "Race: {} ({})", view.race, view.size);
    let _ = writeln!(out, "  {}", view.age);
    let _ = writeln!(out, "Class: {}", view.class_line);
    out.push('\n');

    for row in &view.abilities {
        let _ = writeln!(out, "  {:<14}{:>3}  {:>3}", row.label, row.score, row.modifier);
    }
    let _ = writeln!(out, "{}", view.average);
    let _ = writeln!(out, "{}", view.modifiers);
    let _ = writeln!(out, "{}", view.method);
    out.push('\n');

    let _ = writeln!(out, "Languages: {}", view.languages);
    let _ = writeln!(out, "Proficiencies: {}", view.proficiencies);
    if !view.double_proficiencies.is_empty() {
        let _ = writeln!(out, "{}", view.double_proficiencies);
    }
    out.push('\n');

    let _ = writeln!(out, "Equipment:");
    for line in &view.equipment {
        let _ = writeln!(out, "  - {line}");
    }
    if !view.money.is_empty() {
        let _ = writeln!(out, "Money: {}", view.money.join(", "));
    }
    if let Some(total) = &view.total {
        let _ = writeln!(out, "Total value: {total}");
    }
    out
}

pub fn render_favorites(view: &FavoritesView) -> String {
    match view {
        FavoritesView::Empty { placeholder } => format!("{placeholder}\n"),
        FavoritesView::Cards(cards) => {
            let mut out = String::new();
            for card in cards {
                let id = card.id.map(|id| id.to_string()).unwrap_or_default();
                let _ = writeln!(out, "[{id}] {}", card.name);
                let _ = writeln!(out, "    {}", card.summary);
                let _ = writeln!(out, "    {}", card.class_line);
                let _ = writeln!(out, "    {}", card.detail);
            }
            out
        }
    }
}

/// Text for the clipboard: identity, build, scores, lists, equipment and money.
pub fn export_text(record: &CharacterRecord) -> String {
    let scores: Vec<String> = record.ability_scores.iter().map(|s| s.to_string()).collect();
    let equipment: Vec<String> = record.equipment.iter().map(|item| item.to_string()).collect();

    let mut out = String::new();
    let _ = writeln!(out, "{} — {}", record.name, subtitle(record));
    out.push('\n');
    let _ = writeln!(out, "Background: {}", record.background);
    let _ = writeln!(
        out,
        "Race: {} ({} · {}) · Age: {}",
        record.race,
        record.height,
        record.weight,
        age_text(record)
    );
    let _ = writeln!(out, "Class: {}", record.class_line());
    out.push('\n');
    let _ = writeln!(out, "Ability Scores: {}", scores.join(", "));
    let _ = writeln!(out, "Modifiers: [{}]", modifier_list(record));
    out.push('\n');
    let _ = writeln!(out, "Languages: {}", record.languages.join(", "));
    let _ = writeln!(out, "Proficiencies: {}", record.proficiencies.join(", "));
    out.push('\n');
    let _ = writeln!(out, "Equipment: {}", equipment.join(", "));
    let _ = writeln!(out, "Money: {}", money_lines(record).join(", "));
    if let Some(total) = record.gp_total() {
        let _ = writeln!(out, "Total value: {}", format_money(total));
    }
    out
}
