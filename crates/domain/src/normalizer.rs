//! Validation-and-repair pass for raw character payloads.
//!
//! Whatever the generator (or an old stored favorite) sends, the output is a
//! [`CharacterRecord`] with six ability scores, six integer modifiers and a
//! numeric average. Nothing here fails: malformed input is repaired and every
//! repair is listed in the returned [`RepairReport`].

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::ability::{AbilityScores, Modifiers, ABILITY_COUNT};
use crate::character::CharacterRecord;
use crate::lenient::{coerce_exact_i32, coerce_floor_i32, coerce_number, is_truthy};
use crate::stat_method::roll_4d6_scores;

/// A single repair applied to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repair {
    /// The payload was not a JSON object and was replaced by an empty one
    NotAnObject,
    /// Scores were missing or malformed and were rolled with 4d6-drop-lowest
    ScoresRerolled,
    /// Scores were missing or malformed on a stored record and were set to 10
    ScoresDefaulted,
    /// Scores were present but not plain integers
    ScoresCoerced,
    /// The average was missing or falsy and was computed from the scores
    AverageComputed,
    /// Modifiers were missing or malformed and were derived from the scores
    ModifiersRecomputed,
    /// Modifiers were present but not plain integers
    ModifiersCoerced,
    /// A language or proficiency list contained duplicates
    DuplicatesRemoved,
    /// `money_gp_total` was derived from coins or the money text
    MoneyTotalDerived,
    /// The payload could not be read as a record; only the scores survived
    FieldsDiscarded,
}

/// Every repair applied during one normalization, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    repairs: Vec<Repair>,
}

impl RepairReport {
    pub fn was_repaired(&self) -> bool {
        !self.repairs.is_empty()
    }

    pub fn contains(&self, repair: Repair) -> bool {
        self.repairs.contains(&repair)
    }

    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    fn push(&mut self, repair: Repair) {
        if !self.repairs.contains(&repair) {
            self.repairs.push(repair);
        }
    }
}

/// A guaranteed-valid record plus what had to be fixed to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub record: CharacterRecord,
    pub repairs: RepairReport,
}

/// Normalize a freshly generated payload.
///
/// Missing or malformed scores are replaced by a local 4d6-drop-lowest roll
/// using the injected generator. A single element that does not coerce to a
/// number makes the whole list malformed, so the other five are rolled too.
pub fn normalize(raw: Value, roll: &mut impl FnMut(i32, i32) -> i32) -> Normalized {
    normalize_with(raw, Repair::ScoresRerolled, || roll_4d6_scores(roll))
}

/// Re-validate a stored record before it is shown again.
///
/// Stored scores are trusted and never re-rolled; if they have been lost they
/// become all tens. Modifiers and the average are checked exactly as in
/// [`normalize`].
pub fn revalidate(raw: Value) -> Normalized {
    let mut normalized = revalidate_derived(raw);
    tidy(&mut normalized);
    normalized
}

/// Only the derived-field half of [`revalidate`]: scores, modifiers and the
/// average. A record that already has them comes back unchanged, duplicate
/// list entries and a missing money total included.
pub fn revalidate_derived(raw: Value) -> Normalized {
    repair_derived(raw, Repair::ScoresDefaulted, AbilityScores::neutral)
}

fn normalize_with(
    raw: Value,
    fallback_repair: Repair,
    fallback_scores: impl FnOnce() -> AbilityScores,
) -> Normalized {
    let mut normalized = repair_derived(raw, fallback_repair, fallback_scores);
    tidy(&mut normalized);
    normalized
}

fn repair_derived(
    raw: Value,
    fallback_repair: Repair,
    fallback_scores: impl FnOnce() -> AbilityScores,
) -> Normalized {
    let mut repairs = RepairReport::default();

    let mut map = match raw {
        Value::Object(map) => map,
        _ => {
            repairs.push(Repair::NotAnObject);
            Map::new()
        }
    };

    let (scores, average) = match read_six(map.get("ability_scores"), coerce_floor_i32) {
        Some((scores, coerced)) => {
            if coerced {
                repairs.push(Repair::ScoresCoerced);
            }
            let scores = AbilityScores::new(scores);
            let average = match map.get("ability_average") {
                Some(value) if is_truthy(value) => coerce_number(value),
                _ => None,
            };
            let average = average.unwrap_or_else(|| {
                repairs.push(Repair::AverageComputed);
                scores.average()
            });
            (scores, average)
        }
        None => {
            repairs.push(fallback_repair);
            let scores = fallback_scores();
            (scores, scores.average())
        }
    };

    let modifiers = match read_six(map.get("modifiers"), coerce_exact_i32) {
        Some((modifiers, coerced)) => {
            if coerced {
                repairs.push(Repair::ModifiersCoerced);
            }
            Modifiers::new(modifiers)
        }
        None => {
            repairs.push(Repair::ModifiersRecomputed);
            scores.modifiers()
        }
    };

    map.insert("ability_scores".into(), json!(scores));
    map.insert("ability_average".into(), json!(average));
    map.insert("modifiers".into(), json!(modifiers));

    let record = match serde_json::from_value::<CharacterRecord>(Value::Object(map)) {
        Ok(record) => record,
        Err(_) => {
            repairs.push(Repair::FieldsDiscarded);
            let mut record = CharacterRecord::with_scores(scores);
            record.ability_average = average;
            record.modifiers = modifiers;
            record
        }
    };

    Normalized { record, repairs }
}

/// List hygiene and the derived money total.
fn tidy(normalized: &mut Normalized) {
    let Normalized { record, repairs } = normalized;

    let mut deduped = false;
    for list in [
        &mut record.languages,
        &mut record.proficiencies,
        &mut record.double_proficiencies,
    ] {
        deduped |= dedupe_in_order(list);
    }
    if deduped {
        repairs.push(Repair::DuplicatesRemoved);
    }

    if record.money_gp_total.is_none() {
        if let Some(total) = record.gp_total() {
            record.money_gp_total = Some(total);
            repairs.push(Repair::MoneyTotalDerived);
        }
    }
}

/// Read exactly six coerced integers; `None` when the value is not a
/// six-element array or any element fails to coerce. The flag reports whether
/// any element needed coercion.
fn read_six(
    value: Option<&Value>,
    coerce: fn(&Value) -> Option<i32>,
) -> Option<([i32; ABILITY_COUNT], bool)> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    if items.len() != ABILITY_COUNT {
        return None;
    }

    let mut out = [0; ABILITY_COUNT];
    let mut coerced = false;
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = coerce(item)?;
        coerced |= !item.is_i64();
    }
    Some((out, coerced))
}

fn dedupe_in_order(list: &mut Vec<String>) -> bool {
    let before = list.len();
    let mut seen = std::collections::HashSet::new();
    list.retain(|item| seen.insert(item.clone()));
    list.len() != before
}
