//! Lenient coercion for upstream character payloads.
//!
//! The generator and older stored favorites are loosely typed: numbers arrive
//! as strings, lists arrive as `null`, ages arrive as text. These helpers never
//! fail; a value that cannot be read becomes the field's empty default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::equipment::{EquipmentItem, StructuredItem};
use crate::money::{Coins, Money};

/// Coerce a JSON value to a finite number the way a loosely typed client would.
///
/// - numbers are taken as is
/// - strings are trimmed and parsed; the empty string is 0
/// - booleans are 0 or 1, `null` is 0
/// - arrays, objects and unparseable strings are `None`
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    number.is_finite().then_some(number)
}

/// Coerce to an integer, flooring fractional values.
pub fn coerce_floor_i32(value: &Value) -> Option<i32> {
    let number = coerce_number(value)?.floor();
    if number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

/// Coerce to an integer only when the value is integral.
pub fn coerce_exact_i32(value: &Value) -> Option<i32> {
    let number = coerce_number(value)?;
    if number.fract() != 0.0 {
        return None;
    }
    coerce_floor_i32(value)
}

/// JavaScript-style truthiness, used for "absent or falsy" checks.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar as display text; containers and `null` become empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

/// Scalars as text; `null` and containers are `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        scalar => Some(value_to_text(&scalar)),
    })
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(coerce_exact_i32(&value).and_then(|n| u32::try_from(n).ok()))
}

pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(coerce_number(&value))
}

/// A list of display strings; non-list values become an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    })
}

/// Equipment entries: strings stay plain, objects with a name become
/// structured items, anything else is dropped.
pub fn equipment_list<'de, D>(deserializer: D) -> Result<Vec<EquipmentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(EquipmentItem::Plain(s)),
            Value::Object(map) => structured_item(&map).map(EquipmentItem::Structured),
            _ => None,
        })
        .collect())
}

fn structured_item(map: &serde_json::Map<String, Value>) -> Option<StructuredItem> {
    let name = map.get("name").map(value_to_text).filter(|s| !s.is_empty())?;
    let text = |key: &str| {
        map.get(key)
            .map(value_to_text)
            .filter(|s| !s.is_empty())
    };
    let contents = match map.get("contents") {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(inner) => inner.get("name").map(value_to_text).unwrap_or_default(),
                    other => value_to_text(other),
                })
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        _ => None,
    };

    Some(StructuredItem {
        name,
        qty: map
            .get("qty")
            .and_then(coerce_exact_i32)
            .and_then(|n| u32::try_from(n).ok()),
        item_type: text("type"),
        notes: text("notes"),
        contents,
    })
}

pub fn opt_coins<'de, D>(deserializer: D) -> Result<Option<Coins>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(None);
    };
    let amount = |key: &str| {
        map.get(key)
            .and_then(coerce_floor_i32)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    };
    Ok(Some(Coins {
        gp: amount("gp"),
        sp: amount("sp"),
        cp: amount("cp"),
    }))
}

pub fn opt_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().map(Money::Amount),
        Value::String(s) if !s.trim().is_empty() => Some(Money::Text(s)),
        _ => None,
    })
}
