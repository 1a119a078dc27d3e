//! Random character generation.
//!
//! Every random choice goes through the injected `roll(min, max)` generator
//! (inclusive bounds), so callers decide where randomness comes from.

use crate::character::CharacterRecord;
use crate::dice::{choose_with, sample_with};
use crate::equipment::EquipmentItem;
use crate::money::Money;
use crate::stat_method::StatMethod;
use crate::tables;

/// Pronouns used when the request leaves them blank.
pub const DEFAULT_PRONOUNS: &str = "they/them";

/// Caller-supplied overrides for a generated character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRequest {
    pub name: Option<String>,
    pub pronouns: Option<String>,
    pub gender: Option<String>,
    /// Requested stat method label, echoed back as `stat_method`
    pub method: Option<String>,
}

impl CharacterRequest {
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Generate a complete character record.
pub fn build_character(
    request: &CharacterRequest,
    roll: &mut impl FnMut(i32, i32) -> i32,
) -> CharacterRecord {
    let method_label = request
        .method
        .clone()
        .unwrap_or_else(|| StatMethod::default().as_str().to_string());
    let scores = StatMethod::from_request(&method_label).roll_scores(roll);

    let background = pick(tables::BACKGROUNDS, roll);
    let race = pick(tables::RACES, roll);
    let class_name = pick(tables::CLASSES, roll);
    let alignment = pick(tables::ALIGNMENTS, roll);

    let (height, weight) = random_height_weight(&race, roll);
    let (age_lo, age_hi) = tables::race_age_range(&race);
    let age = u32::try_from(roll(age_lo, age_hi)).ok();

    let languages = random_languages(&race, roll);
    let proficiencies = owned(sample_with(tables::SKILLS, 2, roll));
    let equipment = sample_with(tables::EQUIPMENT, 3, roll)
        .into_iter()
        .map(EquipmentItem::from)
        .collect();
    let gold = choose_with(tables::STARTING_GOLD, roll).copied().unwrap_or(0);

    let name = match trimmed(request.name.as_deref()) {
        Some(name) => name,
        None => format!(
            "{} {}",
            pick(tables::FIRST_NAMES, roll),
            pick(tables::SURNAMES, roll)
        ),
    };
    let pronouns =
        trimmed(request.pronouns.as_deref()).unwrap_or_else(|| DEFAULT_PRONOUNS.to_string());
    let gender = trimmed(request.gender.as_deref()).unwrap_or_default();

    let personality_trait = pick(tables::PERSONALITY_TRAITS, roll);
    let ideal = pick(tables::IDEALS, roll);
    let bond = pick(tables::BONDS, roll);
    let flaw = pick(tables::FLAWS, roll);
    let subclass = pick(tables::subclass_options(&class_name), roll);

    CharacterRecord {
        name,
        pronouns,
        gender,
        age,
        background,
        personality_trait,
        ideal,
        bond,
        flaw,
        alignment,
        race,
        height,
        weight,
        class_name,
        subclass,
        stat_method: method_label,
        languages,
        proficiencies,
        double_proficiencies: Vec::new(),
        equipment,
        money: Some(Money::Text(format!("{gold} gp"))),
        ..CharacterRecord::with_scores(scores)
    }
}

fn pick(table: &[&str], roll: &mut impl FnMut(i32, i32) -> i32) -> String {
    choose_with(table, roll)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Height as "5ft 3in" and weight as "140lbs".
fn random_height_weight(race: &str, roll: &mut impl FnMut(i32, i32) -> i32) -> (String, String) {
    let (dh, dw) = tables::race_size_offsets(race);
    let (h_lo, h_hi) = tables::HEIGHT_VARIANCE_IN;
    let (w_lo, w_hi) = tables::WEIGHT_VARIANCE_LB;

    let inches = tables::BASE_HEIGHT_IN + dh + roll(h_lo, h_hi);
    let pounds = tables::BASE_WEIGHT_LB + dw + roll(w_lo, w_hi);

    (
        format!("{}ft {}in", inches.div_euclid(12), inches.rem_euclid(12)),
        format!("{pounds}lbs"),
    )
}

/// Common, racial languages, and a one-in-four chance of one more.
fn random_languages(race: &str, roll: &mut impl FnMut(i32, i32) -> i32) -> Vec<String> {
    let mut languages = vec!["Common".to_string()];
    languages.extend(tables::racial_languages(race).into_iter().map(str::to_string));

    if roll(1, 100) <= 25 {
        let unknown: Vec<&str> = tables::LANGUAGES
            .iter()
            .copied()
            .filter(|l| !languages.iter().any(|known| known == l))
            .collect();
        if let Some(extra) = choose_with(&unknown, roll) {
            languages.push(extra.to_string());
        }
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;
    use crate::dice::testing::lowest;
    use crate::stat_method::STANDARD_ARRAY;
    use rand::Rng;

    fn random() -> impl FnMut(i32, i32) -> i32 {
        let mut rng = rand::thread_rng();
        move |min, max| rng.gen_range(min..=max)
    }

    #[test]
    fn generated_record_is_complete() {
        let mut roll = random();
        for _ in 0..100 {
            let record = build_character(&CharacterRequest::default(), &mut roll);

            assert!(!record.name.is_empty());
            assert_eq!(record.pronouns, DEFAULT_PRONOUNS);
            assert_eq!(record.stat_method, "4d6");
            assert!(record.ability_scores.iter().all(|s| (3..=18).contains(&s)));
            assert_eq!(record.modifiers, record.ability_scores.modifiers());
            assert!((record.ability_average - record.ability_scores.average()).abs() < 1e-9);
            assert_eq!(record.languages.first().map(String::as_str), Some("Common"));
            assert_eq!(record.proficiencies.len(), 2);
            assert_ne!(record.proficiencies[0], record.proficiencies[1]);
            assert!(record.double_proficiencies.is_empty());
            assert_eq!(record.equipment.len(), 3);
            assert!(tables::RACES.contains(&record.race.as_str()));

            let gold = record.gp_total().expect("money");
            assert!([0.0, 5.0, 10.0, 15.0, 25.0, 50.0].contains(&gold));

            let (lo, hi) = tables::race_age_range(&record.race);
            let age = i32::try_from(record.age.expect("age")).expect("fits");
            assert!((lo..=hi).contains(&age));
        }
    }

    #[test]
    fn request_overrides_are_trimmed() {
        let request = CharacterRequest {
            name: Some("  Ira Gale ".into()),
            pronouns: Some("xe/xem".into()),
            gender: Some(" nonbinary ".into()),
            method: Some("standard".into()),
        };
        let record = build_character(&request, &mut random());

        assert_eq!(record.name, "Ira Gale");
        assert_eq!(record.pronouns, "xe/xem");
        assert_eq!(record.gender, "nonbinary");
        assert_eq!(record.stat_method, "standard");

        let mut scores = *record.ability_scores.as_array();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, STANDARD_ARRAY);
    }

    #[test]
    fn unknown_method_rolls_4d6_but_echoes_label() {
        let request = CharacterRequest::default().with_method("3d6-in-order");
        let record = build_character(&request, &mut lowest());
        assert_eq!(record.stat_method, "3d6-in-order");
        assert_eq!(record.ability_scores, AbilityScores::new([3; 6]));
    }

    #[test]
    fn lowest_rolls_pick_first_table_entries() {
        let record = build_character(&CharacterRequest::default(), &mut lowest());
        assert_eq!(record.background, "Acolyte");
        assert_eq!(record.alignment, "Lawful Good");
        assert_eq!(record.name, "Ash Thorne");
        // lowest roll passes the one-in-four language check
        assert_eq!(record.languages.len(), 2);
    }

    #[test]
    fn height_is_feet_and_inches() {
        let (height, weight) = random_height_weight("Goliath", &mut |_, max| max);
        assert_eq!(height, "6ft 6in");
        assert_eq!(weight, "230lbs");
    }

    #[test]
    fn point_buy_method() {
        let scores = build_character(&CharacterRequest::default().with_method("pointbuy"), &mut random())
            .ability_scores;
        let mut sorted = *scores.as_array();
        sorted.sort_unstable();
        assert_eq!(sorted, [10, 10, 10, 11, 11, 11]);
    }
}
