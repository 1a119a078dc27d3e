//! The character record produced by the generator and kept as a favorite.
//!
//! Descriptive fields are opaque text and deserialize leniently (see
//! [`crate::lenient`]). Ability scores and modifiers are strict here; raw
//! payloads go through [`crate::normalizer`] before they become a record.
//! Unknown fields are kept in `extra` and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ability::{AbilityScores, Modifiers};
use crate::equipment::EquipmentItem;
use crate::ids::FavoriteId;
use crate::lenient;
use crate::money::{Coins, Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pronouns: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub background: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub personality_trait: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ideal: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bond: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub flaw: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub alignment: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub race: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub height: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub weight: String,
    #[serde(rename = "class", default, deserialize_with = "lenient::string")]
    pub class_name: String,
    /// Empty when the class has no subclass at first level
    #[serde(default, deserialize_with = "lenient::string")]
    pub subclass: String,

    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub ability_average: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Method label as requested, e.g. "4d6"
    #[serde(default, deserialize_with = "lenient::string")]
    pub stat_method: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub proficiencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub double_proficiencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::equipment_list")]
    pub equipment: Vec<EquipmentItem>,

    #[serde(default, deserialize_with = "lenient::opt_coins", skip_serializing_if = "Option::is_none")]
    pub coins: Option<Coins>,
    #[serde(default, deserialize_with = "lenient::opt_money", skip_serializing_if = "Option::is_none")]
    pub money: Option<Money>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub money_gp_total: Option<f64>,

    /// Assigned only when saved as a favorite
    #[serde(
        default,
        deserialize_with = "deserialize_favorite_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<FavoriteId>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn deserialize_favorite_id<'de, D>(deserializer: D) -> Result<Option<FavoriteId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::opt_i64(deserializer)?.map(FavoriteId::new))
}

impl CharacterRecord {
    /// A record with the given scores and derived fields, everything else empty.
    pub fn with_scores(scores: AbilityScores) -> Self {
        Self {
            name: String::new(),
            pronouns: String::new(),
            gender: String::new(),
            age: None,
            background: String::new(),
            personality_trait: String::new(),
            ideal: String::new(),
            bond: String::new(),
            flaw: String::new(),
            alignment: String::new(),
            race: String::new(),
            height: String::new(),
            weight: String::new(),
            class_name: String::new(),
            subclass: String::new(),
            ability_scores: scores,
            ability_average: scores.average(),
            modifiers: scores.modifiers(),
            stat_method: String::new(),
            languages: Vec::new(),
            proficiencies: Vec::new(),
            double_proficiencies: Vec::new(),
            equipment: Vec::new(),
            coins: None,
            money: None,
            money_gp_total: None,
            id: None,
            extra: Map::new(),
        }
    }

    /// "Class" or "Class — Subclass"
    pub fn class_line(&self) -> String {
        if self.subclass.is_empty() {
            self.class_name.clone()
        } else {
            format!("{} — {}", self.class_name, self.subclass)
        }
    }

    /// Gold-piece total: the explicit total, else coins, else the money field.
    pub fn gp_total(&self) -> Option<f64> {
        self.money_gp_total
            .or_else(|| self.coins.map(|c| c.total_gp()))
            .or_else(|| self.money.as_ref().and_then(Money::gp_value))
    }

    /// Copy of this record carrying a favorite id.
    pub fn with_id(mut self, id: FavoriteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this record without its favorite id.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_generator_payload() {
        let payload = json!({
            "name": "Ash Thorne",
            "pronouns": "they/them",
            "gender": "",
            "age": 34,
            "background": "Sage",
            "alignment": "True Neutral",
            "race": "Wood Elf",
            "height": "5ft 3in",
            "weight": "140lbs",
            "class": "Rogue",
            "subclass": "Thief",
            "ability_scores": [15, 14, 13, 12, 10, 8],
            "ability_average": 12.0,
            "modifiers": [2, 2, 1, 1, 0, -1],
            "money": "25 gp",
            "languages": ["Common", "Elvish"],
            "proficiencies": ["Stealth", "Insight"],
            "double_proficiencies": [],
            "equipment": ["Shortsword", {"name": "Rope", "qty": 2, "type": "gear"}],
            "stat_method": "standard"
        });

        let record: CharacterRecord = serde_json::from_value(payload).expect("deserialize");
        assert_eq!(record.name, "Ash Thorne");
        assert_eq!(record.age, Some(34));
        assert_eq!(record.class_name, "Rogue");
        assert_eq!(record.class_line(), "Rogue — Thief");
        assert_eq!(record.equipment.len(), 2);
        assert_eq!(record.gp_total(), Some(25.0));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn lenient_fields_never_fail() {
        let payload = json!({
            "name": 7,
            "age": "unknown",
            "languages": "Common",
            "equipment": null,
            "coins": {"gp": "3", "sp": 4},
            "id": "1700000000000"
        });

        let record: CharacterRecord = serde_json::from_value(payload).expect("deserialize");
        assert_eq!(record.name, "7");
        assert_eq!(record.age, None);
        assert!(record.languages.is_empty());
        assert!(record.equipment.is_empty());
        assert_eq!(record.coins, Some(Coins { gp: 3, sp: 4, cp: 0 }));
        assert_eq!(record.id, Some(FavoriteId::new(1_700_000_000_000)));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let payload = json!({
            "name": "Mira",
            "ability_scores": [10, 10, 10, 10, 10, 10],
            "modifiers": [0, 0, 0, 0, 0, 0],
            "portrait": "mira.png"
        });

        let record: CharacterRecord = serde_json::from_value(payload).expect("deserialize");
        assert_eq!(record.extra.get("portrait"), Some(&json!("mira.png")));

        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["portrait"], json!("mira.png"));
        assert_eq!(value["class"], json!(""));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn gp_total_prefers_explicit_total() {
        let mut record = CharacterRecord::with_scores(AbilityScores::neutral());
        record.coins = Some(Coins { gp: 1, sp: 5, cp: 0 });
        assert_eq!(record.gp_total(), Some(1.5));
        record.money_gp_total = Some(9.0);
        assert_eq!(record.gp_total(), Some(9.0));
    }
}
