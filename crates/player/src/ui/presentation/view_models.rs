//! View-models for the character sheet and the favorites list.
//!
//! Built by pure functions from domain records; renderers only lay them out.

use charforge_domain::{
    coin_lines, equipment_to_string, format_modifier, format_money, Ability, CharacterRecord,
    FavoriteId, Money,
};

/// Shown in place of the favorites list when nothing is saved.
pub const NO_FAVORITES_PLACEHOLDER: &str = "No favorites yet — save a character to see it here.";

/// Stand-in for blank descriptive fields.
pub const BLANK: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub label: &'static str,
    pub score: i32,
    /// Signed, e.g. "+2"
    pub modifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub name: String,
    /// "pronouns · gender · alignment · Age n"
    pub subtitle: String,
    pub background: String,
    pub traits: String,
    pub race: String,
    /// "height · weight"
    pub size: String,
    pub age: String,
    pub class_line: String,
    pub abilities: Vec<AbilityRow>,
    pub average: String,
    pub modifiers: String,
    pub method: String,
    pub languages: String,
    pub proficiencies: String,
    /// Empty when there are none
    pub double_proficiencies: String,
    pub equipment: Vec<String>,
    pub money: Vec<String>,
    pub total: Option<String>,
}

impl SheetView {
    pub fn from_record(record: &CharacterRecord) -> Self {
        let abilities = Ability::ALL
            .iter()
            .map(|&ability| AbilityRow {
                label: ability.label(),
                score: record.ability_scores.get(ability),
                modifier: format_modifier(record.modifiers.get(ability)),
            })
            .collect();

        let double_proficiencies = if record.double_proficiencies.is_empty() {
            String::new()
        } else {
            format!("Double prof: {}", record.double_proficiencies.join(", "))
        };

        Self {
            name: record.name.clone(),
            subtitle: subtitle(record),
            background: record.background.clone(),
            traits: format!(
                "{} · Ideal: {} · Bond: {} · Flaw: {}",
                record.personality_trait, record.ideal, record.bond, record.flaw
            ),
            race: record.race.clone(),
            size: format!("{} · {}", record.height, record.weight),
            age: format!("Age: {} years", age_text(record)),
            class_line: record.class_line(),
            abilities,
            average: format!("Average: {:.2}", record.ability_average),
            modifiers: format!("Modifiers: [{}]", modifier_list(record)),
            method: format!("Method: {}", record.stat_method),
            languages: record.languages.join(", "),
            proficiencies: or_blank(record.proficiencies.join(", ")),
            double_proficiencies,
            equipment: record.equipment.iter().map(equipment_to_string).collect(),
            money: money_lines(record),
            total: record.gp_total().map(format_money),
        }
    }
}

/// One saved character in the favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteCard {
    pub id: Option<FavoriteId>,
    pub name: String,
    /// "pronouns · alignment · race · Age n"
    pub summary: String,
    pub class_line: String,
    /// "background · Scores: [..]"
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesView {
    Empty { placeholder: &'static str },
    Cards(Vec<FavoriteCard>),
}

impl FavoritesView {
    pub fn from_records(records: &[CharacterRecord]) -> Self {
        if records.is_empty() {
            return Self::Empty {
                placeholder: NO_FAVORITES_PLACEHOLDER,
            };
        }
        Self::Cards(records.iter().map(FavoriteCard::from_record).collect())
    }
}

impl FavoriteCard {
    fn from_record(record: &CharacterRecord) -> Self {
        let scores: Vec<String> = record.ability_scores.iter().map(|s| s.to_string()).collect();
        Self {
            id: record.id,
            name: record.name.clone(),
            summary: format!(
                "{} · {} · {} · Age {}",
                record.pronouns,
                record.alignment,
                record.race,
                age_text(record)
            ),
            class_line: record.class_line(),
            detail: format!("{} · Scores: [{}]", record.background, scores.join(", ")),
        }
    }
}

pub(crate) fn subtitle(record: &CharacterRecord) -> String {
    format!(
        "{} · {} · {} · Age {}",
        record.pronouns,
        or_blank(record.gender.clone()),
        record.alignment,
        age_text(record)
    )
}

pub(crate) fn age_text(record: &CharacterRecord) -> String {
    record
        .age
        .map(|age| age.to_string())
        .unwrap_or_else(|| BLANK.to_string())
}

pub(crate) fn modifier_list(record: &CharacterRecord) -> String {
    let modifiers: Vec<String> = record.modifiers.iter().map(|m| m.to_string()).collect();
    modifiers.join(", ")
}

/// Coin lines when the record has coins, else the money field as given.
pub(crate) fn money_lines(record: &CharacterRecord) -> Vec<String> {
    if let Some(coins) = &record.coins {
        return coin_lines(coins);
    }
    match &record.money {
        Some(Money::Text(text)) if !text.trim().is_empty() => vec![text.clone()],
        Some(Money::Amount(amount)) => vec![format_money(*amount)],
        _ => Vec::new(),
    }
}

fn or_blank(text: String) -> String {
    if text.is_empty() {
        BLANK.to_string()
    } else {
        text
    }
}
